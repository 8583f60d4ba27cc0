// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod preview;
pub mod issue;
pub mod session;
pub mod bars;
pub mod format;
pub mod mock;
pub mod settings;
