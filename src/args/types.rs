use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base url of the games api, e.g. https://api.example.com
    #[arg(
        long,
        env = "NEXT_API_URL",
        value_name = "API_URL",
        value_parser = crate::args::validation::check_api_url
    )]
    pub api_url: String,
    #[arg(short = 'b', long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "5201")]
    pub port: u16,
    /// How long a fetched game stays servable before upstream is asked again.
    #[arg(long, value_name = "SECONDS", default_value = "60")]
    pub revalidate_secs: u32,
    /// Upstream request timeout. Unset means the http client default (no overall timeout).
    #[arg(
        long,
        value_name = "SECONDS",
        value_parser = crate::args::validation::check_positive_secs
    )]
    pub request_timeout_secs: Option<u64>,
    /// The only host cover images may be served from, over https.
    #[arg(long, value_name = "HOSTNAME", default_value = crate::view::image::DEFAULT_IMAGE_HOST)]
    pub image_host: String,
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub api_url: String,
    pub bind: String,
    pub port: u16,
    pub revalidate: chrono::Duration,
    pub request_timeout: Option<std::time::Duration>,
    pub image_host: String,
    pub static_dir: String,
}
