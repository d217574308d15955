use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            api_url: args.api_url,
            bind: args.bind,
            port: args.port,
            revalidate: chrono::Duration::seconds(i64::from(args.revalidate_secs)),
            request_timeout: args.request_timeout_secs.map(std::time::Duration::from_secs),
            image_host: args.image_host.trim().to_string(),
            static_dir: args.static_dir,
        }
    }
}
