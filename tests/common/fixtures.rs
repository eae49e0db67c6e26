//! Test fixtures - the four deployable files and where they land.

pub const BINARY_SOURCE: &str = "target/release/raspberry-web";
pub const CONFIG_SOURCE: &str = "config/configuration.toml";
pub const DATABASE_SOURCE: &str = "raspberry-web-db/raspberry-web.sqlite";
pub const SERVICE_SOURCE: &str = "config/raspberry-web.service";

pub const BINARY_TARGET: &str = "/usr/local/bin/raspberry-web";
pub const CONFIG_TARGET: &str = "/usr/local/raspberry-web/configuration.toml";
pub const DATABASE_TARGET: &str = "/usr/local/raspberry-web/database/raspberry-web.sqlite";
pub const SERVICE_TARGET: &str = "/etc/systemd/system/raspberry-web.service";

pub const BINARY_V1: &[u8] = b"\x7fELF raspberry-web 1.0.0";
pub const BINARY_V2: &[u8] = b"\x7fELF raspberry-web 1.1.0";

pub const CONFIG: &str = r#"[server]
port = 8000
bind = "0.0.0.0"
"#;

pub const DATABASE: &[u8] = b"SQLite format 3\0empty";

pub const SERVICE_UNIT: &str = r#"[Unit]
Description=raspberry-web
After=network.target

[Service]
ExecStart=/usr/local/bin/raspberry-web
Restart=on-failure

[Install]
WantedBy=multi-user.target
"#;
