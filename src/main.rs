use gesture_arcade::cli::{self, Command, Settings};
use gesture_arcade::core::game_loop::emergency_restore;
use gesture_arcade::core::FrameLoop;
use gesture_arcade::games::ArcadeGame;
use gesture_arcade::tracking::open_provider;
use gesture_arcade::utils::{build_info, logging, Config};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io;

fn main() -> io::Result<()> {
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(Command::Help) => {
            print!("{}", cli::HELP);
            return Ok(());
        }
        Ok(Command::Run(args)) => args,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Run 'gesture-arcade --help' for usage.");
            std::process::exit(1);
        }
    };

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: {}. Using default settings.", err);
            Config::default()
        }
    };
    let settings = Settings::resolve(&config, &args);

    if let Some(path) = config.log_file_path() {
        logging::init_file_logging(&path, &config.log_level);
    }
    log::info!("{}", build_info::version_line());
    log::info!(
        "Starting {} at {} fps (seed {:?})",
        settings.game.title(),
        settings.fps,
        settings.seed
    );

    let provider = match open_provider(&settings.source) {
        Ok(provider) => provider,
        Err(err) => {
            eprintln!(
                "Could not open tracking source '{}': {}",
                settings.source, err
            );
            std::process::exit(1);
        }
    };

    let rng: Box<dyn RngCore> = match settings.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    // Leave raw mode before the panic message is printed.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        emergency_restore();
        default_hook(info);
    }));

    let mut frame_loop = FrameLoop::new(settings.game, provider, rng);
    let result = frame_loop.run(settings.fps);

    let stats = frame_loop.stats();
    log::info!(
        "Session over: {} frames, {} skipped, score {}",
        stats.frames,
        stats.skipped_frames,
        frame_loop.game().score()
    );
    result
}
