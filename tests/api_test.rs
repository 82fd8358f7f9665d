use lucky_wheel::{
    api::{
        commands::{execute_command, winner_number_to_index, Command},
        dto::CommandResponse,
        errors::ApiError,
        queries::{build_shuffle_view, run_query, Query, QueryResponse},
    },
    domain::FramePhase,
    driver::RecordingPacer,
    engine::{EngineError, NoopHost, ShuffleEngine, ShuffleState},
    infra::{RaffleConfig, ScriptedRng},
    visual::{LabelEmphasis, WheelPalette},
    RaffleController, Screen,
};

/// Утилита: контроллер со стандартным колесом на 20 сегментов.
fn make_controller(presets: Vec<i64>) -> RaffleController<ScriptedRng> {
    let config = RaffleConfig {
        winner_presets: presets,
        ..RaffleConfig::standard()
    };
    RaffleController::from_config(&config, ScriptedRng::new(vec![2])).unwrap()
}

/// Утилита: довести контроллер до экрана колеса через API.
fn go_to_wheel(controller: &mut RaffleController<ScriptedRng>) {
    execute_command(controller, Command::StartShuffle).unwrap();
    controller.shuffle_tick(&mut NoopHost).unwrap();
    execute_command(controller, Command::StopShuffle).unwrap();
    execute_command(controller, Command::Confirm).unwrap();
}

#[test]
fn winner_number_is_one_based() {
    assert_eq!(winner_number_to_index(1), Ok(0));
    assert_eq!(winner_number_to_index(20), Ok(19));
    assert!(matches!(
        winner_number_to_index(0),
        Err(ApiError::BadRequest(_))
    ));
}

/// Полный поток через команды: шаффл → подтверждение → спин.
#[test]
fn command_flow_shuffle_confirm_spin() {
    let mut c = make_controller(vec![]);

    let resp = execute_command(&mut c, Command::PressShuffleButton).unwrap();
    assert_eq!(
        resp,
        CommandResponse::ShuffleState {
            state: ShuffleState::Running,
            chosen_number: None
        }
    );

    c.shuffle_tick(&mut NoopHost).unwrap();
    let resp = execute_command(&mut c, Command::PressShuffleButton).unwrap();
    // ScriptedRng[2] по [1..5] -> 3
    assert_eq!(
        resp,
        CommandResponse::ShuffleState {
            state: ShuffleState::Stopped,
            chosen_number: Some(3)
        }
    );

    let resp = execute_command(&mut c, Command::Confirm).unwrap();
    assert_eq!(
        resp,
        CommandResponse::ScreenChanged {
            screen: Screen::Wheel
        }
    );

    let resp = execute_command(
        &mut c,
        Command::Spin {
            winner_number: Some(4),
        },
    )
    .unwrap();
    assert_eq!(
        resp,
        CommandResponse::SpinStarted {
            winner_number: 4,
            total_steps: 103
        }
    );

    // второй спин во время первого — отклонён
    let resp = execute_command(&mut c, Command::Spin { winner_number: None }).unwrap();
    assert_eq!(resp, CommandResponse::SpinRejected);

    let winner = c.run_spin(&mut NoopHost, &mut RecordingPacer::new()).unwrap();
    assert_eq!(winner, Some(3));
}

#[test]
fn spin_with_zero_or_out_of_range_number_is_bad_request() {
    let mut c = make_controller(vec![]);
    go_to_wheel(&mut c);

    let err = execute_command(&mut c, Command::Spin { winner_number: Some(0) }).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    let err = execute_command(&mut c, Command::Spin { winner_number: Some(21) }).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    assert!(!c.spin_engine().is_spinning());
}

#[test]
fn commands_on_wrong_screen_are_reported() {
    let mut c = make_controller(vec![]);

    let err = execute_command(&mut c, Command::Spin { winner_number: None }).unwrap_err();
    assert_eq!(
        err,
        ApiError::WrongScreen {
            expected: Screen::Wheel,
            actual: Screen::Shuffle
        }
    );

    let err = execute_command(&mut c, Command::Confirm).unwrap_err();
    assert!(matches!(err, ApiError::InvalidCommand(_)));
}

#[test]
fn engine_errors_map_to_api_errors() {
    let bad = ApiError::from(EngineError::SegmentOutOfRange {
        segment: 30,
        segment_count: 20,
    });
    assert!(matches!(bad, ApiError::BadRequest(_)));

    let internal = ApiError::from(EngineError::Internal("boom"));
    assert!(matches!(internal, ApiError::EngineError(_)));
}

#[test]
fn command_roundtrips_through_json() {
    let cmd = Command::Spin {
        winner_number: Some(7),
    };
    let json = serde_json::to_string(&cmd).unwrap();
    let back: Command = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cmd);
}

/// GetWheel: стили для всех сегментов, победитель выделен.
#[test]
fn wheel_query_after_spin() {
    let mut c = make_controller(vec![6]);
    let palette = WheelPalette::default();

    match run_query(&c, &palette, &Query::GetWheel) {
        QueryResponse::Wheel(view) => {
            assert_eq!(view.phase, FramePhase::Resting);
            assert_eq!(view.label, "Press [space]");
            assert_eq!(view.styles.len(), 20);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    go_to_wheel(&mut c);
    execute_command(&mut c, Command::Spin { winner_number: None }).unwrap();
    c.run_spin(&mut NoopHost, &mut RecordingPacer::new()).unwrap();

    match run_query(&c, &palette, &Query::GetWheel) {
        QueryResponse::Wheel(view) => {
            assert_eq!(view.segment_count, 20);
            assert_eq!(view.angle_per_segment, 18.0);
            assert_eq!(view.current_number, 6);
            assert_eq!(view.trail_numbers, vec![6]);
            assert_eq!(view.label, "Item: 6");
            assert!(!view.spinning);
            assert_eq!(view.styles[5].emphasis, LabelEmphasis::Winner);
            assert_eq!(view.styles[5].fill, palette.highlight);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    match run_query(&c, &palette, &Query::GetRounds) {
        QueryResponse::Rounds(rounds) => {
            assert_eq!(rounds.len(), 1);
            assert_eq!(rounds[0].winner_number, 6);
            assert_eq!(rounds[0].chosen_number, Some(3));
            assert!(rounds[0].from_preset);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    match run_query(&c, &palette, &Query::GetRaffle) {
        QueryResponse::Raffle(view) => {
            assert_eq!(view.screen, Screen::Shuffle);
            assert_eq!(view.round, 1);
            assert_eq!(view.play_count, 0);
            assert_eq!(view.shuffle.state, ShuffleState::Idle);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn shuffle_button_label_follows_state() {
    let mut engine = ShuffleEngine::<u32>::new(30).unwrap();
    assert_eq!(build_shuffle_view(&engine).button_label, "START");

    engine.start(vec![1, 2]).unwrap();
    assert_eq!(build_shuffle_view(&engine).button_label, "STOP");
}
