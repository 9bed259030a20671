// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CI environment handling.
//!
//! Detects which CI provider is running the build, extracts the commit
//! and branch pair to check from its environment variables, and decides
//! whether a source branch is exempt from the directive requirements.

pub mod branch;
pub mod providers;
pub mod resolver;

pub use branch::ignore_source_branch;
pub use providers::{detect_ci_environment, CiEnvironment};
pub use resolver::{resolve_target, CheckTarget, DEFAULT_BRANCH};
