// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for state change notifications.

use crate::state::DeviceState;
use crate::subscription::SubscriptionId;

/// Trait for types that notify subscribers after each state refresh.
///
/// Callbacks run once per successful refresh, after the new state is in
/// place, and receive that state. Failed refreshes notify nobody.
pub trait Subscribable {
    /// Subscribes to state refreshes.
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceState) + Send + Sync + 'static;

    /// Removes a subscription.
    ///
    /// Returns `true` if the subscription existed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
