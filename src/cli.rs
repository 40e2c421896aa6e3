// Clap definitions in derive style

#[derive(clap::Parser)]
#[command(name = "album-tally", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// List the allowed genres in order
    Genres {
        /// Print as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Check whether a genre is allowed
    Check {
        #[arg(value_name = "GENRE")]
        genre: String,
    },

    /// Create an album and print it with the album count
    New {
        #[arg(value_name = "GENRE")]
        genre: String,

        /// Release date, stored as given
        #[arg(value_name = "DATE")]
        date: String,
    },

    /// Create one album per allowed genre plus a rejected one, then print the tally
    Demo,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
