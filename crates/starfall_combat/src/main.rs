//! Headless прогон боевого ядра
//!
//! Запускает Bevy App без рендера: волна врагов снижается, стрелок
//! поливает Spread'ом. Для проверки что ядро живёт без движка.

use bevy::prelude::*;
use starfall_combat::{
    create_headless_app, Enemy, FireControl, FireIntent, SimulationPlugin, WeaponKind,
    WeaponSwitchIntent,
};

fn main() {
    let seed = 42;
    println!("Starting STARFALL combat core headless run (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);
    // Один FixedUpdate на итерацию цикла — прогон не зависит от wall clock
    app.insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
        std::time::Duration::from_secs_f64(1.0 / 60.0),
    ));

    // Стрелок внизу экрана
    let shooter = app
        .world_mut()
        .spawn((FireControl::default(), Transform::from_xyz(0.0, -8.0, 0.0)))
        .id();
    app.world_mut().send_event(WeaponSwitchIntent {
        entity: shooter,
        kind: WeaponKind::Spread,
    });

    // Волна врагов сверху
    for i in 0..5 {
        app.world_mut().spawn((
            Enemy {
                speed: 4.0,
                ..Default::default()
            },
            Transform::from_xyz(-8.0 + 4.0 * i as f32, 9.0, 0.0),
        ));
    }

    // Жмём на гашетку каждый тик, 600 тиков (~10 секунд)
    for tick in 0..600 {
        app.world_mut().send_event(FireIntent { shooter });
        app.update();

        if tick % 100 == 0 {
            let entity_count = app.world().entities().len();
            println!("Tick {}: {} entities", tick, entity_count);
        }
    }

    println!("Simulation complete!");
}
