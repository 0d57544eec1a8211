//! Vanguard Core - Entry Point
//!
//! Headless arena demo: registers two characters with the simulation
//! driver and runs a fixed-timestep duel — ability casts, damage with
//! protection, scheduled regeneration, death routing — printing status
//! as it goes.

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use vanguard_core::ability::{AbilityKind, EffectKind};
use vanguard_core::attribute::{PrimaryAttribute, SecondaryAttribute};
use vanguard_core::character::{CharacterEvent, CharacterState, Role};
use vanguard_core::content::load_ability_catalog;
use vanguard_core::core::error::Result;
use vanguard_core::core::types::EntityId;
use vanguard_core::simulation::{DeathObserver, SimulationDriver};

#[derive(Parser, Debug)]
#[command(about = "Headless duel driving the character simulation core")]
struct Args {
    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Fixed delta time per tick, in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// RNG seed for reproducible duels
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Optional TOML ability catalog (defaults to the built-in content)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Dump final character snapshots as JSON
    #[arg(long)]
    json: bool,
}

struct AnnouncingObserver;

impl DeathObserver for AnnouncingObserver {
    fn on_player_death(&mut self, id: EntityId) {
        tracing::info!(?id, "player character down");
    }

    fn on_ai_death(&mut self, id: EntityId) {
        tracing::info!(?id, "AI character down");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("vanguard_core=debug")
        .init();

    let args = Args::parse();
    tracing::info!(ticks = args.ticks, seed = args.seed, "arena starting");

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut driver = SimulationDriver::new();
    driver.add_observer(Box::new(AnnouncingObserver));

    let mut player = CharacterState::with_role(Role::Player);
    player.set_title("Vanguard");
    let mut rival = CharacterState::with_role(Role::Ai);
    rival.set_title("Sentinel");

    if let Some(path) = &args.content {
        let catalog = load_ability_catalog(path)?;
        player = player.with_abilities(catalog.clone());
        rival = rival.with_abilities(catalog);
        tracing::info!(path = %path.display(), "ability content loaded");
    }

    let player_id = driver.register(player);
    let rival_id = driver.register(rival);
    driver.tick(0.0); // flush setup events

    let kinds = AbilityKind::ALL;
    let mut casts = 0_usize;
    let status_interval = (1.0 / args.dt).max(1.0) as u64;

    for tick in 0..args.ticks {
        for (id, event) in driver.tick(args.dt) {
            match event {
                CharacterEvent::Died { .. } => {}
                CharacterEvent::LevelChanged { level } => {
                    tracing::info!(?id, level, "level up");
                }
                CharacterEvent::AbilityExecuted { kind } => {
                    tracing::debug!(?id, %kind, "ability executed");
                }
                _ => {}
            }
        }

        let duel_over = driver.character(player_id)?.is_dead()
            || driver.character(rival_id)?.is_dead();
        if duel_over {
            award_kill_experience(&mut driver, player_id, rival_id)?;
            print_status(&driver, tick, &[player_id, rival_id])?;
            break;
        }

        // Alternate attackers every 1.5 seconds of simulated time
        if tick % (status_interval + status_interval / 2) == 0 && tick > 0 {
            let (attacker, defender) = if casts % 2 == 0 {
                (player_id, rival_id)
            } else {
                (rival_id, player_id)
            };
            let kind = kinds[casts % kinds.len()];
            casts += 1;

            run_cast(&mut driver, attacker, defender, kind, &mut rng)?;
        }

        // Top up anyone below a third of max health
        for id in [player_id, rival_id] {
            let health = driver
                .character(id)?
                .attribute_values(PrimaryAttribute::Health.into());
            if health.current < health.max / 3.0 && driver.active_effects().is_empty() {
                tracing::debug!(?id, "scheduling regeneration");
                driver.schedule_regeneration(id, PrimaryAttribute::Health, 20.0)?;
            }
        }

        if tick % status_interval == 0 {
            print_status(&driver, tick, &[player_id, rival_id])?;
        }
    }

    if args.json {
        for id in [player_id, rival_id] {
            println!("{}", serde_json::to_string_pretty(driver.character(id)?)?);
        }
    }

    Ok(())
}

/// One ability activation: a stable roll of the cast parameters, then
/// damage routed through the defender's own state when the effect calls
/// for it.
fn run_cast(
    driver: &mut SimulationDriver,
    attacker: EntityId,
    defender: EntityId,
    kind: AbilityKind,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    let cast = match driver.character_mut(attacker)?.execute_ability(kind, rng) {
        Ok(cast) => cast,
        Err(err) => {
            tracing::debug!(?attacker, %kind, "cast unavailable: {err}");
            return Ok(());
        }
    };

    let effect = driver.character(attacker)?.ability_definition(kind)?.effect;
    if effect == EffectKind::Damage {
        // Output doubles as flat protection on the receiving end
        let protection = driver
            .character(defender)?
            .current_value(SecondaryAttribute::Output.into());
        let applied = driver.execute_damage(defender, cast.power, protection)?;
        tracing::info!(?attacker, ?defender, %kind, applied, "strike landed");
    } else {
        tracing::info!(?attacker, %kind, duration = cast.duration, "defense raised");
    }
    Ok(())
}

/// Winner collects the loser's reward bonus as experience.
fn award_kill_experience(
    driver: &mut SimulationDriver,
    player_id: EntityId,
    rival_id: EntityId,
) -> Result<()> {
    let (winner, loser) = if driver.character(player_id)?.is_dead() {
        (rival_id, player_id)
    } else {
        (player_id, rival_id)
    };
    let bonus = driver.character(loser)?.reward_bonus();
    driver.character_mut(winner)?.add_experience(bonus as f32);
    tracing::info!(?winner, bonus, "kill reward granted");
    Ok(())
}

fn print_status(driver: &SimulationDriver, tick: u64, ids: &[EntityId]) -> Result<()> {
    for &id in ids {
        let character = driver.character(id)?;
        let health = character.attribute_values(PrimaryAttribute::Health.into());
        let energy = character.attribute_values(PrimaryAttribute::Energy.into());
        println!(
            "[{tick:>5}] {:<10} {:<9} hp {:>5.1}/{:<5.1} en {:>5.1}/{:<5.1} lvl {:>3} xp {:>6.1}",
            character.title(),
            character.lifecycle().to_string(),
            health.current,
            health.max,
            energy.current,
            energy.max,
            character.progression().level(),
            character.progression().experience(),
        );
    }
    Ok(())
}
