// Copyright (C) 2020-2024 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board_layout;
pub mod display;
pub mod game_config;
pub mod game_state;
pub mod placement;
pub mod play_scorer;
pub mod rack;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linewords=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
