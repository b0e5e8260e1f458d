// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for parsing Iris light replies.
//!
//! Command replies carry nothing the bridge uses, so the only modelled
//! response is the state document served at the device base URL.

mod state;

pub use state::StateResponse;
