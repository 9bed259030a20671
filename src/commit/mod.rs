// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module for message handling.

mod message;

pub use message::Commit;
