// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod factory;
mod loader;

pub use factory::HandlerFactory;
pub use loader::{load_config, HandlerConfig, MsgConfig, Target};
