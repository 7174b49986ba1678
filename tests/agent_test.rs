use bevy::prelude::*;
use lifesim::agent::{
    DEAD_COLOR, HORNY_COLOR, HUNGRY_COLOR, IDLE_COLOR, STARVING_COLOR, TIRED_COLOR,
};
use lifesim::behavior::{behave, find_mate, find_nearest_food};
use lifesim::{Agent, AgentId, Bounds, DeathCause, Drive, Food, Traits};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

/// Hunger threshold 70, horniness threshold 75, tiredness threshold 30, max age 90
fn balanced_traits() -> Traits {
    Traits {
        hunger_resistance: 0.5,
        libido_strength: 0.5,
        energy_efficiency: 0.5,
        longevity: 0.5,
    }
}

/// Content agent: not hungry, not tired, not horny
fn agent_at(x: f32, y: f32) -> Agent {
    let mut agent = Agent::new(Vec2::new(x, y), Vec2::ZERO, IDLE_COLOR, balanced_traits());
    agent.energy = 80.0;
    agent
}

fn color_channels(color: Color) -> [f32; 3] {
    let srgba = Srgba::from(color);
    [srgba.red, srgba.green, srgba.blue]
}

/// Mature agent ready to mate
fn suitor_at(x: f32, y: f32, id: u64) -> Agent {
    let mut agent = agent_at(x, y);
    agent.id = AgentId(id);
    agent.age = agent.derived.max_age * 0.5;
    agent.horniness = 90.0;
    agent
}

#[test]
fn test_derived_values_follow_traits() {
    let derived = balanced_traits().derive();
    assert_eq!(derived.hunger_threshold, 70.0);
    assert_eq!(derived.horniness_threshold, 75.0);
    assert_eq!(derived.tiredness_threshold, 30.0);
    assert_eq!(derived.hunger_rate, 10.0);
    assert_eq!(derived.horniness_rate, 6.0);
    assert_eq!(derived.energy_drain_rate, 9.0);
    assert_eq!(derived.max_age, 90.0);
    assert_eq!(derived.base_speed, 110.0);

    let extreme = Traits {
        hunger_resistance: 1.0,
        libido_strength: 1.0,
        energy_efficiency: 0.0,
        longevity: 0.0,
    }
    .derive();
    assert_eq!(extreme.hunger_threshold, 90.0);
    assert_eq!(extreme.horniness_threshold, 60.0, "high libido means a lower threshold");
    assert_eq!(extreme.max_age, 60.0);
}

#[test]
fn test_founders_start_in_documented_ranges() {
    let mut rng = rng();
    let bounds = Bounds::default();
    for _ in 0..100 {
        let agent = Agent::random_founder(&bounds, &mut rng);
        assert!((0.0..50.0).contains(&agent.hunger));
        assert!((0.0..40.0).contains(&agent.horniness));
        assert!((50.0..100.0).contains(&agent.energy));
        assert!((0.3..1.0).contains(&agent.traits.hunger_resistance));
        assert!((0.2..1.0).contains(&agent.traits.libido_strength));
        assert!((0.4..1.0).contains(&agent.traits.energy_efficiency));
        assert!((0.5..1.0).contains(&agent.traits.longevity));
        assert!(agent.position.x >= 5.0 && agent.position.x <= 795.0);
        assert!(agent.position.y >= 5.0 && agent.position.y <= 595.0);
        assert_eq!(agent.derived, agent.traits.derive());
    }
}

#[test]
fn test_needs_accrue_and_age_advances() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agent = agent_at(100.0, 100.0);

    let death = agent.update_needs(1.0, &bounds, &mut rng);

    assert_eq!(death, None);
    assert_eq!(agent.age, 1.0);
    assert_eq!(agent.hunger, 10.0);
    assert_eq!(agent.energy, 71.0);
    assert_eq!(agent.horniness, 0.0, "immature agents accrue no horniness");
}

#[test]
fn test_horniness_waits_for_maturity() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agent = agent_at(100.0, 100.0);
    agent.traits.libido_strength = 1.0;
    agent.derived = agent.traits.derive();
    let maturity = agent.maturity_age();

    while agent.age + 0.1 <= maturity {
        agent.hunger = 0.0;
        agent.update_needs(0.1, &bounds, &mut rng);
        assert_eq!(agent.horniness, 0.0, "horny at age {}", agent.age);
    }

    agent.hunger = 0.0;
    agent.update_needs(0.5, &bounds, &mut rng);
    assert!(agent.is_mature());
    assert!(agent.horniness > 0.0);
}

#[test]
fn test_old_age_kills_and_freezes_needs() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agent = agent_at(100.0, 100.0);
    agent.age = agent.derived.max_age - 0.05;
    agent.hunger = 40.0;

    let death = agent.update_needs(0.1, &bounds, &mut rng);
    assert_eq!(death, Some(DeathCause::OldAge));
    assert!(agent.is_dead);
    assert_eq!(agent.color, DEAD_COLOR);
    assert_eq!(agent.hunger, 40.0, "no needs advance on the tick of death");

    let snapshot = agent.clone();
    for _ in 0..10 {
        assert_eq!(agent.update_needs(1.0, &bounds, &mut rng), None);
    }
    assert_eq!(agent.age, snapshot.age);
    assert_eq!(agent.hunger, snapshot.hunger);
    assert_eq!(agent.horniness, snapshot.horniness);
    assert_eq!(agent.energy, snapshot.energy);
    assert_eq!(agent.health, snapshot.health);
}

#[test]
fn test_starvation_drains_health_until_death() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agent = agent_at(100.0, 100.0);
    agent.hunger = 100.0;
    agent.health = 6.0;

    assert_eq!(agent.update_needs(1.0, &bounds, &mut rng), None);
    assert_eq!(agent.health, 1.0);

    assert_eq!(agent.update_needs(1.0, &bounds, &mut rng), Some(DeathCause::Starvation));
    assert!(agent.is_dead);
    assert_eq!(agent.health, 0.0);
}

#[test]
fn test_health_regenerates_only_when_not_hungry() {
    let mut rng = rng();
    let bounds = Bounds::default();

    let mut fed = agent_at(100.0, 100.0);
    fed.health = 50.0;
    fed.update_needs(1.0, &bounds, &mut rng);
    assert_eq!(fed.health, 52.0);

    let mut hungry = agent_at(100.0, 100.0);
    hungry.health = 50.0;
    hungry.hunger = 75.0;
    hungry.update_needs(1.0, &bounds, &mut rng);
    assert_eq!(hungry.health, 50.0);
}

#[test]
fn test_cooldown_counts_past_zero() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agent = agent_at(100.0, 100.0);
    agent.reproduction_cooldown = 0.05;

    agent.update_needs(0.1, &bounds, &mut rng);
    assert!(agent.reproduction_cooldown < 0.0);
    let after = agent.reproduction_cooldown;

    agent.update_needs(0.1, &bounds, &mut rng);
    assert_eq!(agent.reproduction_cooldown, after, "stops counting once available");
}

#[test]
fn test_horny_requires_cooldown_elapsed() {
    let mut agent = suitor_at(0.0, 0.0, 1);
    assert!(agent.is_horny());
    agent.reproduction_cooldown = 1.0;
    assert!(!agent.is_horny());
    agent.reproduction_cooldown = 0.0;
    assert!(agent.is_horny());
}

#[test]
fn test_wander_timer_retargets() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agent = agent_at(100.0, 100.0);
    agent.wander_timer = 0.05;
    let old_target = agent.wander_target;

    agent.update_needs(0.1, &bounds, &mut rng);

    assert_ne!(agent.wander_target, old_target);
    assert!(agent.wander_timer >= 5.0 && agent.wander_timer < 10.0);
    assert!(agent.wander_target.x >= 50.0 && agent.wander_target.x <= 750.0);
    assert!(agent.wander_target.y >= 50.0 && agent.wander_target.y <= 550.0);
}

#[test]
fn test_decide_color_priority() {
    let mut agent = suitor_at(0.0, 0.0, 1);
    assert_eq!(agent.decide_color(), HORNY_COLOR);

    agent.energy = 10.0;
    assert_eq!(agent.decide_color(), TIRED_COLOR);

    agent.hunger = 80.0;
    assert_eq!(agent.decide_color(), HUNGRY_COLOR);

    agent.hunger = 96.0;
    assert_eq!(agent.decide_color(), STARVING_COLOR);
    assert_eq!(agent.decide_color(), agent.decide_color());

    let mut calm = agent_at(0.0, 0.0);
    assert_eq!(calm.decide_color(), IDLE_COLOR);

    // Horny but immature shows as idle
    calm.horniness = 90.0;
    assert_eq!(calm.decide_color(), IDLE_COLOR);
}

#[test]
fn test_seek_speed_modifiers_compose() {
    let mut agent = agent_at(0.0, 0.0);
    agent.seek(Vec2::new(10.0, 0.0));
    assert_eq!(agent.velocity, Vec2::new(110.0, 0.0));

    agent.energy = 10.0;
    agent.seek(Vec2::new(0.0, 10.0));
    assert!((agent.velocity.y - 66.0).abs() < 1e-4);

    agent.hunger = 96.0;
    agent.seek(Vec2::new(0.0, 10.0));
    assert!((agent.velocity.y - 110.0 * 0.6 * 0.4).abs() < 1e-4);
}

#[test]
fn test_hungry_agent_eats_nearby_food() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![agent_at(0.0, 0.0)];
    agents[0].hunger = 80.0;
    agents[0].energy = 50.0;
    let mut food = vec![Food::new(Vec2::new(5.0, 0.0))];

    let child = behave(&mut agents, 0, &mut food, 0.1, &bounds, &mut rng);

    assert!(child.is_none());
    assert!(food[0].eaten);
    assert_eq!(agents[0].hunger, 30.0);
    assert_eq!(agents[0].energy, 70.0);
    assert_eq!(agents[0].velocity, Vec2::new(110.0, 0.0));
}

#[test]
fn test_eating_leaves_transient_negative_hunger() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![agent_at(0.0, 0.0)];
    agents[0].derived.hunger_threshold = 10.0;
    agents[0].hunger = 20.0;
    let mut food = vec![Food::new(Vec2::new(3.0, 0.0))];

    behave(&mut agents, 0, &mut food, 0.1, &bounds, &mut rng);
    assert!(food[0].eaten);
    assert_eq!(agents[0].hunger, -30.0, "not floored until the next needs update");

    agents[0].update_needs(0.1, &bounds, &mut rng);
    assert_eq!(agents[0].hunger, 0.0);
}

#[test]
fn test_hungry_agent_steers_to_nearest_food() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![agent_at(100.0, 100.0)];
    agents[0].hunger = 80.0;
    let mut food = vec![
        Food::new(Vec2::new(100.0, 300.0)),
        Food::new(Vec2::new(150.0, 100.0)),
        Food::new(Vec2::new(100.0, 150.0)),
    ];
    food[1].eaten = true;

    assert_eq!(find_nearest_food(agents[0].position, &food), Some(2));
    behave(&mut agents, 0, &mut food, 0.1, &bounds, &mut rng);

    assert!(!food[2].eaten);
    assert!(agents[0].velocity.x.abs() < 1e-4);
    assert!(agents[0].velocity.y > 0.0);
}

#[test]
fn test_nearest_food_ties_go_to_first() {
    let food = vec![Food::new(Vec2::new(10.0, 0.0)), Food::new(Vec2::new(-10.0, 0.0))];
    assert_eq!(find_nearest_food(Vec2::ZERO, &food), Some(0));
    assert_eq!(find_nearest_food(Vec2::ZERO, &[]), None);
}

#[test]
fn test_hungry_agent_without_food_wanders() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![agent_at(100.0, 100.0)];
    agents[0].hunger = 80.0;
    agents[0].wander_target = Vec2::new(400.0, 100.0);

    behave(&mut agents, 0, &mut [], 0.1, &bounds, &mut rng);

    assert!(agents[0].velocity.x > 0.0);
    assert_eq!(agents[0].drive(), Drive::Hungry);
}

#[test]
fn test_tired_agent_rests() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![agent_at(100.0, 100.0)];
    agents[0].energy = 10.0;
    agents[0].velocity = Vec2::new(100.0, 0.0);

    behave(&mut agents, 0, &mut [], 0.5, &bounds, &mut rng);

    assert_eq!(agents[0].velocity, Vec2::new(95.0, 0.0));
    assert_eq!(agents[0].energy, 25.0);
}

#[test]
fn test_hunger_beats_horniness() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![suitor_at(0.0, 0.0, 1), suitor_at(3.0, 0.0, 2)];
    agents[0].hunger = 80.0;
    let mut food = vec![Food::new(Vec2::new(0.0, 5.0))];

    let child = behave(&mut agents, 0, &mut food, 0.1, &bounds, &mut rng);

    assert!(child.is_none());
    assert!(food[0].eaten);
    assert_eq!(agents[1].horniness, 90.0);
}

#[test]
fn test_adjacent_suitors_produce_one_offspring() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![suitor_at(100.0, 100.0, 1), suitor_at(105.0, 100.0, 2)];
    agents[1].traits.longevity = 0.7;
    agents[1].derived = agents[1].traits.derive();
    agents[1].age = agents[1].derived.max_age * 0.5;
    agents[0].color = Color::srgb(0.2, 0.4, 0.6);
    agents[1].color = Color::srgb(0.6, 0.8, 1.0);

    let child = behave(&mut agents, 0, &mut [], 0.1, &bounds, &mut rng)
        .expect("adjacent suitors should mate");

    for parent in &agents {
        assert_eq!(parent.horniness, 30.0);
        assert_eq!(parent.reproduction_cooldown, 20.0);
        assert_eq!(parent.energy, 70.0);
        assert!(!parent.is_horny());
    }

    assert_eq!(child.id, AgentId::UNASSIGNED);
    assert_eq!(child.parents, Some((AgentId(1), AgentId(2))));
    assert_eq!(child.generation, 1);
    assert_eq!(child.age, 0.0);
    assert_eq!(child.hunger, 30.0);
    assert_eq!(child.horniness, 0.0);
    assert_eq!(child.energy, 80.0);
    assert_eq!(child.health, 100.0);
    assert_eq!(child.reproduction_cooldown, 30.0);
    assert!((child.position.x - 102.5).abs() <= 10.0);
    assert!((child.position.y - 100.0).abs() <= 10.0);
    assert!((child.traits.longevity - 0.6).abs() <= 0.1 + 1e-6);
    assert!((child.traits.hunger_resistance - 0.5).abs() <= 0.1 + 1e-6);
    assert_eq!(child.derived, child.traits.derive());
    assert!((child.velocity.length() - child.derived.base_speed).abs() < 1e-3);
    for (channel, average) in color_channels(child.color).into_iter().zip([0.4, 0.6, 0.8]) {
        assert!((channel - average).abs() <= 0.1 + 1e-6, "{channel} vs {average}");
    }

    // The mate's turn in the same pass sees the drained horniness
    assert!(behave(&mut agents, 1, &mut [], 0.1, &bounds, &mut rng).is_none());
}

#[test]
fn test_suitor_out_of_reach_steers_closer() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![suitor_at(100.0, 100.0, 1), suitor_at(200.0, 100.0, 2)];

    let child = behave(&mut agents, 0, &mut [], 0.1, &bounds, &mut rng);

    assert!(child.is_none());
    assert_eq!(agents[0].velocity, Vec2::new(110.0, 0.0));
    assert_eq!(agents[1].horniness, 90.0);
}

#[test]
fn test_mate_eligibility() {
    let mut agents = vec![
        suitor_at(100.0, 100.0, 1),
        suitor_at(300.0, 100.0, 2), // beyond courting radius
        suitor_at(110.0, 100.0, 3),
        suitor_at(120.0, 100.0, 4),
        suitor_at(130.0, 100.0, 5),
    ];
    agents[2].is_dead = true;
    agents[3].age = 1.0; // immature
    assert_eq!(find_mate(&agents, 0), Some(4));

    agents[4].reproduction_cooldown = 5.0;
    assert_eq!(find_mate(&agents, 0), None);

    // A suitor never picks itself, even when it is the only eligible agent nearby
    for index in 0..agents.len() {
        assert_ne!(find_mate(&agents, index), Some(index));
    }
}

#[test]
fn test_lonely_suitor_wanders() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![suitor_at(100.0, 100.0, 1)];
    agents[0].wander_target = Vec2::new(100.0, 400.0);

    behave(&mut agents, 0, &mut [], 0.1, &bounds, &mut rng);

    assert_eq!(agents[0].velocity, Vec2::new(0.0, 110.0));
}

#[test]
fn test_arriving_at_wander_target_picks_a_new_one() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![agent_at(100.0, 100.0)];
    agents[0].wander_target = Vec2::new(110.0, 100.0);
    agents[0].wander_timer = 9.9;

    behave(&mut agents, 0, &mut [], 0.1, &bounds, &mut rng);

    assert_ne!(agents[0].wander_target, Vec2::new(110.0, 100.0));
    assert!(agents[0].wander_timer < 10.0);
}

#[test]
fn test_dead_agents_do_nothing() {
    let mut rng = rng();
    let bounds = Bounds::default();
    let mut agents = vec![suitor_at(100.0, 100.0, 1), suitor_at(103.0, 100.0, 2)];
    agents[0].die();

    assert!(behave(&mut agents, 0, &mut [], 0.1, &bounds, &mut rng).is_none());
    assert_eq!(agents[1].horniness, 90.0);
}

#[test]
fn test_food_rots() {
    let mut food = Food::new(Vec2::ZERO);
    assert_eq!(food.freshness(), 1.0);
    food.advance(15.0);
    assert_eq!(food.freshness(), 0.5);
    assert!(!food.is_rotten());
    food.advance(15.0);
    assert!(food.is_rotten());
    assert_eq!(food.freshness(), 0.0);
}

#[test]
fn test_boundary_reflection() {
    let bounds = Bounds::default();

    let mut position = Vec2::new(-3.0, 100.0);
    let mut velocity = Vec2::new(-40.0, 10.0);
    assert!(bounds.reflect(&mut position, &mut velocity, 5.0));
    assert_eq!(position, Vec2::new(5.0, 100.0));
    assert_eq!(velocity, Vec2::new(40.0, 10.0));

    let mut position = Vec2::new(810.0, 598.0);
    let mut velocity = Vec2::new(30.0, 20.0);
    assert!(bounds.reflect(&mut position, &mut velocity, 5.0));
    assert_eq!(position, Vec2::new(795.0, 595.0));
    assert_eq!(velocity, Vec2::new(-30.0, -20.0));

    let mut position = Vec2::new(400.0, 300.0);
    let mut velocity = Vec2::new(30.0, 20.0);
    assert!(!bounds.reflect(&mut position, &mut velocity, 5.0));
    assert_eq!(velocity, Vec2::new(30.0, 20.0));
}

#[test]
fn test_growth_scales_until_maturity() {
    let mut agent = agent_at(0.0, 0.0);
    assert_eq!(agent.growth(), 0.0);
    agent.age = agent.maturity_age() / 2.0;
    assert!((agent.growth() - 0.5).abs() < 1e-6);
    agent.age = agent.derived.max_age;
    assert_eq!(agent.growth(), 1.0);
}
