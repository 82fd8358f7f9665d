use serde::{Deserialize, Serialize};

use crate::controller::RaffleController;
use crate::engine::{RandomSource, SpinStart};

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда оператора.
///
/// Номера сегментов в API — как на колесе (1-based).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Одна кнопка старт/стоп шаффла.
    PressShuffleButton,

    StartShuffle,

    StopShuffle,

    /// Подтвердить число и перейти к колесу.
    Confirm,

    /// Крутить колесо. `winner_number` — принудительный победитель (1-based).
    Spin { winner_number: Option<u32> },

    /// Вернуться к шаффлу без спина.
    BackToShuffle,
}

/// Перевести 1-based номер из API в индекс сегмента.
pub fn winner_number_to_index(number: u32) -> Result<usize, ApiError> {
    if number == 0 {
        return Err(ApiError::BadRequest(
            "номер сегмента начинается с 1".to_string(),
        ));
    }
    Ok(number as usize - 1)
}

/// Выполнить команду над контроллером.
///
/// Шаги спина команда не крутит: это делает цикл хоста (`step_spin` / `run_spin`).
pub fn execute_command<R: RandomSource>(
    controller: &mut RaffleController<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::PressShuffleButton => {
            let state = controller.press_shuffle_button()?;
            Ok(CommandResponse::ShuffleState {
                state,
                chosen_number: controller.chosen_number(),
            })
        }
        Command::StartShuffle => {
            controller.start_shuffle()?;
            Ok(CommandResponse::ShuffleState {
                state: controller.shuffle_engine().state(),
                chosen_number: None,
            })
        }
        Command::StopShuffle => {
            let chosen = controller.stop_shuffle()?;
            Ok(CommandResponse::ShuffleState {
                state: controller.shuffle_engine().state(),
                chosen_number: chosen,
            })
        }
        Command::Confirm => {
            controller.confirm()?;
            Ok(CommandResponse::ScreenChanged {
                screen: controller.screen(),
            })
        }
        Command::Spin { winner_number } => {
            let winner_override = winner_number.map(winner_number_to_index).transpose()?;
            match controller.spin(winner_override)? {
                SpinStart::Started {
                    winning_segment,
                    total_steps,
                } => Ok(CommandResponse::SpinStarted {
                    winner_number: winning_segment as u32 + 1,
                    total_steps,
                }),
                SpinStart::Rejected => Ok(CommandResponse::SpinRejected),
            }
        }
        Command::BackToShuffle => {
            controller.back_to_shuffle()?;
            Ok(CommandResponse::ScreenChanged {
                screen: controller.screen(),
            })
        }
    }
}
