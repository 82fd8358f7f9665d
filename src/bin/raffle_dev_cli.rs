// src/bin/raffle_dev_cli.rs
//
// Dev-CLI: прогоняет несколько раундов розыгрыша в терминале.
//
//   raffle_dev_cli [rounds] [seed] [config.json] [speed]
//
// speed — множитель темпа (по умолчанию 4.0, т.е. в 4 раза быстрее реального).

use std::env;
use std::process::ExitCode;

use log::{debug, error, info};

use lucky_wheel::api::{run_query, Query, QueryResponse};
use lucky_wheel::domain::{Frame, FramePhase, SegmentIndex};
use lucky_wheel::driver::ThreadPacer;
use lucky_wheel::engine::{HostError, ShuffleHost, SpinHost};
use lucky_wheel::infra::{init_logging, DeterministicRng, RaffleConfig, RngSeed};
use lucky_wheel::visual::WheelPalette;
use lucky_wheel::{RaffleController, Screen};

const DEFAULT_ROUNDS: u32 = 3;
const DEFAULT_SPEED: f64 = 4.0;
/// Сколько тиков шаффла (≈ секунда при 30 Гц) крутим до "нажатия" STOP.
const SHUFFLE_TICKS: u64 = 30;

/// Хост, который рисует колесо строкой в терминале.
struct TerminalHost {
    segment_count: usize,
    ticks: u64,
}

impl TerminalHost {
    fn render(&self, frame: &Frame) -> String {
        (0..self.segment_count)
            .map(|s| {
                if frame.trail.last() == Some(&s) {
                    '●'
                } else if frame.trail.contains(&s) {
                    '○'
                } else {
                    '·'
                }
            })
            .collect()
    }
}

impl SpinHost for TerminalHost {
    fn draw_frame(&mut self, frame: &Frame) -> Result<(), HostError> {
        match frame.phase {
            FramePhase::Settled => println!("[WHEEL] {}  {}", self.render(frame), frame.label()),
            _ => debug!("[WHEEL] {}  {:>3}", self.render(frame), frame.label()),
        }
        Ok(())
    }

    fn play_tick(&mut self) {
        self.ticks += 1;
    }

    fn on_spin_complete(&mut self, winning_segment: SegmentIndex) {
        info!(
            "[CLI] колесо остановилось на {} ({} щелчков трещотки)",
            winning_segment + 1,
            self.ticks
        );
        self.ticks = 0;
    }
}

impl ShuffleHost<u32> for TerminalHost {
    fn display_shuffle_value(&mut self, value: &u32) -> Result<(), HostError> {
        debug!("[SHUFFLE] {value}");
        Ok(())
    }
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let rounds: u32 = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ROUNDS);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(42);
    let speed: f64 = args
        .get(4)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SPEED);

    let config = match args.get(3) {
        Some(path) => match RaffleConfig::load_from_path(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                error!("[CLI] конфиг {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => RaffleConfig {
            winner_presets: vec![6, 7, 8, 9, 1],
            ..RaffleConfig::standard()
        },
    };

    match run(&config, rounds, seed, speed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("[CLI] розыгрыш прерван: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    config: &RaffleConfig,
    rounds: u32,
    seed: u64,
    speed: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let seed = RngSeed::from_u64(seed);
    info!("[CLI] seed={} раундов={} темп x{}", seed.to_hex(), rounds, speed);

    let mut controller =
        RaffleController::from_config(config, DeterministicRng::from_u64(0))?.with_seed(seed);
    let mut host = TerminalHost {
        segment_count: config.segment_count,
        ticks: 0,
    };
    let mut pacer = ThreadPacer::new(speed);

    for _ in 0..rounds {
        let round = controller.round() + 1;
        println!();
        println!("================ ROUND {round} =================");

        if controller.screen() == Screen::Wheel {
            controller.back_to_shuffle()?;
        }

        let number = controller.run_shuffle_for(SHUFFLE_TICKS, &mut host, &mut pacer)?;
        println!("[SHUFFLE] выпало число {number:?}");
        controller.confirm()?;

        controller.spin(None)?;
        controller.run_spin(&mut host, &mut pacer)?;
    }

    let palette = WheelPalette::default();
    if let QueryResponse::Rounds(summary) = run_query(&controller, &palette, &Query::GetRounds) {
        println!();
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
