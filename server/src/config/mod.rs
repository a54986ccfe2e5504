pub mod roster_config;
