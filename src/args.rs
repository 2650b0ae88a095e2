use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the web server to.
    #[arg(long, value_name = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value_t = 5301)]
    pub port: u16,
    /// Directory of static assets served under /static.
    #[arg(
        long,
        value_name = "STATIC_DIR",
        default_value = "./static",
        value_parser = check_static_dir
    )]
    pub static_dir: String,
}

/// # Errors
///
/// Will return `Err` if the directory does not exist
fn check_static_dir(dir: &str) -> Result<String, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() {
        return Err(format!("The static asset directory '{dir}' does not exist."));
    }
    Ok(dir.to_string())
}

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
