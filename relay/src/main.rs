use clap::{Parser, Subcommand};
use goban::{Request, MAX_BOARD_SIZE};
use relay::{serve, Config, Relay};
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Leave out the column letters and row numbers around the board
    #[arg(long, default_value_t = false)]
    hide_coords: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Start a game and print the first board
    New {
        /// Width and height of the board
        #[arg(short, long, default_value_t = 9, value_parser = clap::value_parser!(u8).range(9..=MAX_BOARD_SIZE as i64))]
        size: u8,

        /// Base64 of a packed board to start from
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Press a button below a board and print the result
    Press {
        /// Name of the board image, which contains the state token
        #[arg(long)]
        artifact: String,

        /// Identifier of the pressed button
        #[arg(long)]
        button: String,
    },
    /// Answer JSON requests from stdin, one per line, until it is closed
    Serve,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let relay = Relay::new(&Config {
        show_coords: !args.hide_coords,
    });

    let req = match args.command {
        Command::New { size, data } => Request::NewGame { size, data },
        Command::Press { artifact, button } => Request::Press { artifact, button },
        Command::Serve => {
            debug!("Serving on stdin/stdout");
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            return serve(&relay, stdin, stdout);
        }
    };

    let resp = relay.handle(req);
    println!("{}", serde_json::to_string_pretty(&resp)?);

    Ok(())
}

// Stdout carries the responses, so logs go to stderr.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
