//! Random self-play.
//!
//! Plays `hands` hands with both seats choosing uniformly between PASS and
//! BET, then prints the last table and player 0's mean payoff.
//!
//! Usage: `kuhn-selfplay [CONFIG.toml]`. Log verbosity follows `RUST_LOG`
//! (e.g. `RUST_LOG=kuhn_poker=debug`).

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kuhn_poker::{Action, GameRng, KuhnConfig, KuhnError, KuhnPokerEnv, PlayerId};

fn play(mut env: KuhnPokerEnv, config: &KuhnConfig) -> Result<(i64, KuhnPokerEnv), KuhnError> {
    let mut agents = GameRng::new(config.seed).fork();
    let mut total = 0i64;

    for hand in 0..config.hands {
        let mut obs = env.reset();
        loop {
            let choice = agents.choose(&obs.valid_actions).copied().unwrap_or(Action::Pass);
            let step = env.step(choice.index() as i64)?;
            if let Some(rewards) = step.rewards {
                total += i64::from(rewards.get(PlayerId::P0));
                info!(hand, history = %step.info.history_str, %rewards, "hand finished");
                break;
            }
            obs = step.observation;
        }
    }

    Ok((total, env))
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match KuhnConfig::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                error!(%path, %err, "could not load config");
                return ExitCode::FAILURE;
            }
        },
        None => KuhnConfig::default(),
    };
    let env = match KuhnPokerEnv::new(config.clone()) {
        Ok(env) => env,
        Err(err) => {
            error!(%err, "invalid config");
            return ExitCode::FAILURE;
        }
    };
    info!(seed = config.seed, hands = config.hands, "starting self-play");

    match play(env, &config) {
        Ok((total, env)) => {
            println!("{}", env.render());
            let mean = total as f64 / config.hands.max(1) as f64;
            println!("Mean payoff for P0 over {} hands: {mean:.4}", config.hands);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "self-play stopped");
            ExitCode::FAILURE
        }
    }
}
