use glam::Vec2;
use proptest::prelude::*;
use umbra_lighting::{LightMap, LightingParams, LightingSystem, apply_point_light, propagate_sky};
use umbra_tiles::{Color, TileGridView, TileKind, TileWorld};

fn world_strategy() -> impl Strategy<Value = TileWorld> {
    (1usize..=16, 1usize..=16).prop_flat_map(|(w, h)| {
        let kinds = prop::collection::vec(0usize..TileKind::COUNT, w * h);
        let surface = prop::collection::vec(-2i32..=h as i32 + 2, w);
        (kinds, surface).prop_map(move |(kinds, surface)| {
            let mut world = TileWorld::new(w, h).unwrap();
            for (i, k) in kinds.into_iter().enumerate() {
                world.set((i % w) as i32, (i / w) as i32, TileKind::ALL[k]);
            }
            world.set_surface(surface).unwrap();
            world
        })
    })
}

fn sources_strategy() -> impl Strategy<Value = Vec<(f32, f32, f32)>> {
    prop::collection::vec((-32.0f32..288.0, -32.0f32..288.0, 0.0f32..=1.0), 0..4)
}

proptest! {
    #[test]
    fn light_stays_between_ambient_and_max(world in world_strategy(), sources in sources_strategy()) {
        let params = LightingParams::default();
        let mut system = LightingSystem::new(params.clone(), world.width(), world.height());
        for (x, y, intensity) in sources {
            system.add_light_source(&world, Vec2::new(x, y), intensity, Color::WHITE);
        }
        system.recalculate_lighting(&world);

        let map = system.light_map().unwrap();
        for &v in map.as_slice() {
            prop_assert!(v >= params.ambient_light && v <= params.max_light, "out of range: {}", v);
        }
    }

    #[test]
    fn point_lights_never_darken_sky(world in world_strategy(), sources in sources_strategy()) {
        let params = LightingParams::default();
        let mut map = LightMap::new(world.width(), world.height(), params.ambient_light);
        propagate_sky(&world, &mut map, &params);
        let sky_only = map.clone();

        for (i, (x, y, intensity)) in sources.into_iter().enumerate() {
            let source = umbra_lighting::LightSource {
                id: umbra_lighting::LightSourceId(i as u32),
                position: Vec2::new(x, y),
                intensity,
                color: Color::WHITE,
                active: true,
            };
            apply_point_light(&source, &mut map, &world, &params);
        }

        for (after, before) in map.as_slice().iter().zip(sky_only.as_slice()) {
            prop_assert!(after >= before);
        }
    }

    #[test]
    fn recompute_is_deterministic(world in world_strategy()) {
        let mut system = LightingSystem::new(LightingParams::default(), world.width(), world.height());
        system.recalculate_lighting(&world);
        let first = system.light_map().unwrap().clone();
        system.recalculate_lighting(&world);
        prop_assert_eq!(system.light_map().unwrap(), &first);
    }

    #[test]
    fn disabled_lighting_is_full_bright(world in world_strategy(), x in -4i32..20, y in -4i32..20) {
        let mut system = LightingSystem::new(LightingParams::default(), world.width(), world.height());
        system.recalculate_lighting(&world);
        system.set_enabled(false, &world);
        prop_assert_eq!(system.light_level(x, y), 1.0);
        prop_assert_eq!(system.light_color(x, y), Color::WHITE);
    }

    #[test]
    fn all_air_world_gets_no_sky(w in 1usize..=12, h in 1usize..=12) {
        let world = TileWorld::new(w, h).unwrap();
        let params = LightingParams::default();
        let mut map = LightMap::new(w, h, params.ambient_light);
        let stats = propagate_sky(&world, &mut map, &params);
        prop_assert_eq!(stats.seeds, 0);
        prop_assert_eq!(map.lit_count(), 0);
    }
}
