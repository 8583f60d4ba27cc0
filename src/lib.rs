// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod barcode;
pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod currency;
pub mod form;
pub mod logging;
pub mod mock;
pub mod models;
pub mod utils;
pub mod view;
