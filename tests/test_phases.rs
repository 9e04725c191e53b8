use castle_defender::constants::*;
use castle_defender::context::GameContext;
use castle_defender::driver::Game;
use castle_defender::entities::{Arrow, Enemy};
use castle_defender::input::Action;
use castle_defender::phase::*;
use castle_defender::surface::{DrawCommand, FrameRecorder, ImageId};

fn new_game() -> Game {
    Game::new(Some(42))
}

/// Drive a game from the start screen into a fresh round.
fn started_game() -> Game {
    let mut game = new_game();
    game.push_action(Action::Confirm);
    game.tick(&mut FrameRecorder::new());
    assert_eq!(game.phase(), PhaseKind::Active);
    game
}

fn active(game: &mut Game) -> &mut ActivePhase {
    match game.machine.current_mut() {
        Phase::Active(p) => p,
        other => panic!("expected active phase, got {:?}", other.kind()),
    }
}

/// Park every enemy far above the screen so nothing escapes or collides.
fn park_enemies(game: &mut Game) {
    for e in &mut active(game).enemies.enemies {
        e.sprite.set_position(100, -5000);
    }
}

// ── Start ─────────────────────────────────────────────────────────────────────

#[test]
fn machine_starts_on_start_screen() {
    assert_eq!(GameStateMachine::new().kind(), PhaseKind::Start);
}

#[test]
fn start_ignores_everything_but_confirm() {
    let mut game = new_game();
    let mut rec = FrameRecorder::new();
    for action in [Action::Left, Action::Fire, Action::Right] {
        game.push_action(action);
        game.tick(&mut rec);
        assert_eq!(game.phase(), PhaseKind::Start);
    }
    assert!(game.ctx.input.is_empty());
}

#[test]
fn start_draws_background_and_prompt() {
    let mut game = new_game();
    let mut rec = FrameRecorder::new();
    game.tick(&mut rec);
    assert_eq!(rec.images(), vec![ImageId::StartBackground]);
    match rec.text_command("[ Press ENTER to Play ]") {
        Some(DrawCommand::Text { x, y, .. }) => {
            // 23 chars * 12 px = 276 px wide
            assert_eq!(*x, 400 - 138);
            assert_eq!(*y, 290);
        }
        other => panic!("prompt not drawn: {:?}", other),
    }
}

#[test]
fn confirm_starts_round_with_first_wave() {
    let mut game = started_game();
    let phase = active(&mut game);
    assert_eq!(phase.enemies.len(), 5);
    assert_eq!(phase.enemies.waves_generated, 1);
}

// ── Active ────────────────────────────────────────────────────────────────────

#[test]
fn one_input_consumed_per_tick() {
    let mut game = started_game();
    park_enemies(&mut game);
    game.push_action(Action::Left);
    game.push_action(Action::Left);
    game.push_action(Action::Right);

    let mut rec = FrameRecorder::new();
    game.tick(&mut rec);
    assert_eq!(active(&mut game).player.sprite.x, 295);
    assert_eq!(game.ctx.input.len(), 2);

    game.tick(&mut rec);
    assert_eq!(active(&mut game).player.sprite.x, 215);
    game.tick(&mut rec);
    assert_eq!(active(&mut game).player.sprite.x, 295);
    assert!(game.ctx.input.is_empty());
}

#[test]
fn fire_respects_cooldown_across_ticks() {
    let mut game = started_game();
    park_enemies(&mut game);
    let mut rec = FrameRecorder::new();

    game.push_action(Action::Fire);
    game.tick(&mut rec);
    assert_eq!(active(&mut game).player.arrows.len(), 1);

    // Held fire key: one event per tick, all inside the cooldown.
    for _ in 0..ARROW_COOLDOWN_TICKS - 1 {
        game.push_action(Action::Fire);
        game.tick(&mut rec);
    }
    assert_eq!(active(&mut game).player.arrows.len(), 1);

    game.push_action(Action::Fire);
    game.tick(&mut rec);
    assert_eq!(active(&mut game).player.arrows.len(), 2);
}

#[test]
fn arrow_hitting_enemy_scores_a_kill() {
    let mut game = started_game();
    park_enemies(&mut game);
    {
        let phase = active(&mut game);
        // Positions are checked after both sprites have moved this tick.
        phase.enemies.enemies.push(Enemy::at(300, 200 - ENEMY_MOVEMENT_SPEED));
        phase.player.arrows.push(Arrow::new(300, 200 + ARROW_MOVEMENT_SPEED));
    }
    game.tick(&mut FrameRecorder::new());

    let phase = active(&mut game);
    assert!(phase.player.arrows.is_empty());
    assert_eq!(phase.enemies.len(), 5);
    assert_eq!(game.ctx.score.kills, 1);
    assert_eq!(game.ctx.score.current_score(), 1250);
}

#[test]
fn five_escapes_end_the_round() {
    let mut game = started_game();
    for e in &mut active(&mut game).enemies.enemies {
        e.sprite.set_position(100, ESCAPE_THRESHOLD_Y);
    }
    game.tick(&mut FrameRecorder::new());
    assert_eq!(game.phase(), PhaseKind::End);
    assert_eq!(game.ctx.score.escapes, 5);
    assert_eq!(game.ctx.score.current_score(), 0);
}

#[test]
fn four_escapes_keep_playing() {
    let mut game = started_game();
    for e in active(&mut game).enemies.enemies.iter_mut().take(4) {
        e.sprite.set_position(100, ESCAPE_THRESHOLD_Y);
    }
    game.tick(&mut FrameRecorder::new());
    assert_eq!(game.phase(), PhaseKind::Active);
    assert_eq!(game.ctx.score.escapes, 4);
}

#[test]
fn active_draw_order_and_hud() {
    let mut game = started_game();
    game.ctx.score.register_kill();
    game.ctx.score.register_escape();
    active(&mut game).player.fire();

    let mut rec = FrameRecorder::new();
    let phase = match game.machine.current() {
        Phase::Active(p) => p,
        _ => unreachable!(),
    };
    phase.draw(&game.ctx, &mut rec);

    let mut expected = vec![ImageId::Background];
    expected.extend(std::iter::repeat(ImageId::Enemy).take(5));
    expected.extend([ImageId::Castle, ImageId::Arrow, ImageId::Player, ImageId::Ruby]);
    assert_eq!(rec.images(), expected);
    assert_eq!(rec.texts(), vec!["1250", "1 / 5"]);
}

// ── End ───────────────────────────────────────────────────────────────────────

fn ended_game() -> Game {
    let mut game = started_game();
    game.ctx.score.register_kill();
    game.ctx.score.register_kill();
    for e in &mut active(&mut game).enemies.enemies {
        e.sprite.set_position(100, ESCAPE_THRESHOLD_Y);
    }
    game.tick(&mut FrameRecorder::new());
    assert_eq!(game.phase(), PhaseKind::End);
    game
}

#[test]
fn end_screen_shows_final_score() {
    let mut game = ended_game();
    let mut rec = FrameRecorder::new();
    game.tick(&mut rec);
    assert_eq!(rec.images(), vec![ImageId::EndBackground]);
    assert_eq!(
        rec.texts(),
        vec!["GAME OVER", "Score: 2500", "[ Press ENTER to Play Again ]"]
    );
}

#[test]
fn end_ignores_movement_keys() {
    let mut game = ended_game();
    game.push_action(Action::Fire);
    game.tick(&mut FrameRecorder::new());
    assert_eq!(game.phase(), PhaseKind::End);
    assert_eq!(game.ctx.score.kills, 2);
}

#[test]
fn confirm_on_end_restarts_with_clean_score() {
    let mut game = ended_game();
    game.push_action(Action::Confirm);
    game.tick(&mut FrameRecorder::new());

    assert_eq!(game.phase(), PhaseKind::Active);
    assert_eq!(game.ctx.score.kills, 0);
    assert_eq!(game.ctx.score.escapes, 0);
    let phase = active(&mut game);
    assert_eq!(phase.enemies.len(), 5);
    assert_eq!(phase.enemies.waves_generated, 1);
    assert_eq!(phase.player.sprite.x, 375);
}

// ── State machine ─────────────────────────────────────────────────────────────

#[test]
fn set_phase_replaces_current() {
    let mut ctx = GameContext::new(Some(1));
    let mut machine = GameStateMachine::new();
    machine.set_phase(Phase::Active(ActivePhase::new(&mut ctx)));
    assert_eq!(machine.kind(), PhaseKind::Active);
    machine.set_phase(Phase::End(EndPhase::new()));
    assert_eq!(machine.kind(), PhaseKind::End);
}

#[test]
fn driver_clears_surface_every_tick() {
    let mut game = new_game();
    let mut rec = FrameRecorder::new();
    for _ in 0..3 {
        game.tick(&mut rec);
    }
    assert_eq!(rec.clears, 3);
    assert_eq!(game.frame, 3);
    assert_eq!(rec.images(), vec![ImageId::StartBackground]);
}

#[test]
fn same_seed_gives_same_waves() {
    let a = started_game();
    let b = started_game();
    let positions = |g: &Game| match g.machine.current() {
        Phase::Active(p) => p
            .enemies
            .enemies
            .iter()
            .map(|e| (e.sprite.x, e.sprite.y))
            .collect::<Vec<_>>(),
        _ => Vec::new(),
    };
    assert_eq!(positions(&a), positions(&b));
}
