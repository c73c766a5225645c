//! The fixed sprite catalogs.
//!
//! Each style has its own list of entries. An entry names where its files
//! go (`category/name`), what to draw and at which base size. The lists are
//! data; [`crate::driver`] walks them.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::{AssetError, Result};
use crate::sprites::{
    Airframe, BuildingKind, CarModel, Depth, Icon, Magnitude, Projectile, RoadKind, RooftopKind,
    SkyKind, Sprite, State, Style, TankClass, Weapon, Weather, Widget,
};

/// One sprite variant to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Directory relative to the style root, e.g. `Effects/Explosions`.
    pub category: &'static str,
    /// File stem without scale suffix, e.g. `explosion_medium_2`.
    pub name: String,
    pub sprite: Sprite,
    pub state: State,
    pub size: (u32, u32),
}

impl Entry {
    fn new(
        category: &'static str,
        name: impl Into<String>,
        sprite: Sprite,
        state: State,
        size: (u32, u32),
    ) -> Self {
        Self {
            category,
            name: name.into(),
            sprite,
            state,
            size,
        }
    }

    fn idle(
        category: &'static str,
        name: impl Into<String>,
        sprite: Sprite,
        size: (u32, u32),
    ) -> Self {
        Self::new(category, name, sprite, State::Idle, size)
    }

    /// Base output path relative to the style root, without extension.
    pub fn base_path(&self) -> PathBuf {
        PathBuf::from(self.category).join(&self.name)
    }
}

/// Every entry of a style's catalog, in generation order.
pub fn catalog(style: Style) -> Vec<Entry> {
    match style {
        Style::SideView => side_view(),
        Style::TopDown => top_down(),
    }
}

/// Fail if two entries would write the same files.
pub fn check_unique(entries: &[Entry]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        let path = entry.base_path();
        if !seen.insert(path.clone()) {
            return Err(AssetError::Build {
                message: format!("catalog lists '{}' more than once", path.display()),
                help: Some("every entry needs its own category and name".to_string()),
            });
        }
    }
    Ok(())
}

const MAGNITUDES: [(Magnitude, &str); 3] = [
    (Magnitude::Small, "small"),
    (Magnitude::Medium, "medium"),
    (Magnitude::Large, "large"),
];

const SKIES: [(SkyKind, &str); 3] = [
    (SkyKind::Night, "night"),
    (SkyKind::Dusk, "dusk"),
    (SkyKind::Storm, "storm"),
];

const ICONS: [(Icon, &str); 3] = [
    (Icon::Health, "health"),
    (Icon::Missile, "missile"),
    (Icon::MachineGun, "machinegun"),
];

/// Player helicopter in every state it supports.
fn player_states(entries: &mut Vec<Entry>, size: (u32, u32)) {
    for state in [State::Idle, State::BankLeft, State::BankRight, State::Damaged] {
        entries.push(Entry::new(
            "Player/Helicopter",
            format!("helicopter_{}", state.slug()),
            Sprite::Helicopter(Airframe::Player),
            state,
            size,
        ));
    }
}

/// `count` animation frames named `{stem}_{frame}`.
fn frames(
    entries: &mut Vec<Entry>,
    category: &'static str,
    stem: &str,
    sprite: Sprite,
    count: u32,
    size: (u32, u32),
) {
    for frame in 0..count {
        entries.push(Entry::new(
            category,
            format!("{stem}_{frame}"),
            sprite,
            State::Frame(frame),
            size,
        ));
    }
}

fn side_view() -> Vec<Entry> {
    let mut e = Vec::new();

    player_states(&mut e, (64, 64));
    frames(&mut e, "Player/Effects", "engine_exhaust", Sprite::EngineExhaust, 4, (32, 32));

    e.push(Entry::idle(
        "Enemies/Helicopters",
        "enemy_scout",
        Sprite::Helicopter(Airframe::Scout),
        (48, 48),
    ));
    e.push(Entry::idle(
        "Enemies/Helicopters",
        "enemy_gunship",
        Sprite::Helicopter(Airframe::Gunship),
        (64, 64),
    ));
    e.push(Entry::idle("Enemies/Tanks", "tank_basic", Sprite::Tank(TankClass::Basic), (56, 48)));
    e.push(Entry::idle("Enemies/Tanks", "tank_heavy", Sprite::Tank(TankClass::Heavy), (64, 56)));
    e.push(Entry::idle("Enemies/Turrets", "turret_aa", Sprite::Turret, (48, 48)));
    e.push(Entry::idle("Enemies/Drones", "drone_small", Sprite::Drone, (24, 24)));
    e.push(Entry::idle("Enemies/Boss", "boss_gunship", Sprite::Boss, (128, 128)));

    e.push(Entry::idle(
        "Environment/Buildings",
        "building_small",
        Sprite::Building(BuildingKind::Small),
        (64, 96),
    ));
    e.push(Entry::idle(
        "Environment/Buildings",
        "building_tall",
        Sprite::Building(BuildingKind::Tall),
        (80, 160),
    ));
    e.push(Entry::idle(
        "Environment/Buildings",
        "building_corp",
        Sprite::Building(BuildingKind::Corp),
        (96, 192),
    ));
    e.push(Entry::idle(
        "Environment/Roads",
        "road_straight",
        Sprite::Road(RoadKind::Straight),
        (64, 64),
    ));
    e.push(Entry::idle(
        "Environment/Roads",
        "road_intersection",
        Sprite::Road(RoadKind::Intersection),
        (64, 64),
    ));
    e.push(Entry::idle(
        "Environment/Rooftops",
        "ac_unit",
        Sprite::Rooftop(RooftopKind::AcUnit),
        (32, 32),
    ));
    e.push(Entry::idle(
        "Environment/Rooftops",
        "antenna",
        Sprite::Rooftop(RooftopKind::Antenna),
        (16, 48),
    ));
    e.push(Entry::idle("Environment/Bridges", "bridge_section", Sprite::Bridge, (128, 64)));
    e.push(Entry::idle("Environment/Slums", "slum_building", Sprite::Slum, (64, 64)));

    frames(
        &mut e,
        "Effects/MuzzleFlashes",
        "muzzle_machinegun",
        Sprite::MuzzleFlash(Weapon::MachineGun),
        3,
        (32, 32),
    );
    e.push(Entry::idle(
        "Effects/MuzzleFlashes",
        "muzzle_missile",
        Sprite::MuzzleFlash(Weapon::Missile),
        (48, 48),
    ));
    for ((magnitude, label), side) in MAGNITUDES.into_iter().zip([32, 64, 96]) {
        let stem = format!("explosion_{label}");
        frames(&mut e, "Effects/Explosions", &stem, Sprite::Explosion(magnitude), 4, (side, side));
    }
    frames(&mut e, "Effects/Trails", "trail", Sprite::Trail, 4, (16, 32));
    e.push(Entry::idle(
        "Effects/Bullets",
        "bullet_player",
        Sprite::Bullet(Projectile::Player),
        (16, 8),
    ));
    e.push(Entry::idle(
        "Effects/Bullets",
        "bullet_enemy",
        Sprite::Bullet(Projectile::Enemy),
        (16, 8),
    ));
    e.push(Entry::idle(
        "Effects/Bullets",
        "bullet_missile",
        Sprite::Bullet(Projectile::Missile),
        (24, 12),
    ));
    e.push(Entry::idle("Effects/Shields", "shield_energy", Sprite::Shield, (64, 64)));
    e.push(Entry::idle(
        "Effects/Weather",
        "rain_overlay",
        Sprite::Weather(Weather::Rain),
        (64, 64),
    ));
    e.push(Entry::idle("Effects/Weather", "smoke", Sprite::Weather(Weather::Smoke), (48, 48)));
    e.push(Entry::idle("Effects/Weather", "fire", Sprite::Weather(Weather::Fire), (32, 32)));

    e.push(Entry::idle("UI/HUD", "hud_corner", Sprite::Widget(Widget::HudCorner), (64, 64)));
    e.push(Entry::idle("UI/HUD", "healthbar_bg", Sprite::Widget(Widget::HealthbarBg), (128, 24)));
    e.push(Entry::idle(
        "UI/HUD",
        "healthbar_fill",
        Sprite::Widget(Widget::HealthbarFill),
        (120, 16),
    ));
    for (icon, label) in ICONS {
        e.push(Entry::idle(
            "UI/Icons",
            format!("icon_{label}"),
            Sprite::Widget(Widget::Icon(icon)),
            (32, 32),
        ));
    }
    e.push(Entry::idle("UI/Buttons", "button_normal", Sprite::Widget(Widget::Button), (128, 48)));
    e.push(Entry::new(
        "UI/Buttons",
        "button_hover",
        Sprite::Widget(Widget::Button),
        State::Hover,
        (128, 48),
    ));
    e.push(Entry::idle("UI", "minimap_frame", Sprite::Widget(Widget::MinimapFrame), (96, 96)));
    e.push(Entry::idle("UI", "minimap_player", Sprite::Widget(Widget::MinimapPlayer), (12, 12)));
    e.push(Entry::idle("UI", "minimap_enemy", Sprite::Widget(Widget::MinimapEnemy), (10, 10)));

    e.push(Entry::idle(
        "Backgrounds/Parallax",
        "parallax_far",
        Sprite::Parallax(Depth::Far),
        (256, 128),
    ));
    e.push(Entry::idle(
        "Backgrounds/Parallax",
        "parallax_mid",
        Sprite::Parallax(Depth::Mid),
        (256, 160),
    ));
    e.push(Entry::idle(
        "Backgrounds/Parallax",
        "parallax_near",
        Sprite::Parallax(Depth::Near),
        (256, 192),
    ));
    for (kind, label) in SKIES {
        e.push(Entry::idle(
            "Backgrounds/Skies",
            format!("sky_{label}"),
            Sprite::Sky(kind),
            (64, 256),
        ));
    }
    e.push(Entry::idle(
        "Backgrounds/Decorations",
        "flying_car_1",
        Sprite::FlyingCar(CarModel::Sleek),
        (32, 16),
    ));
    e.push(Entry::idle(
        "Backgrounds/Decorations",
        "flying_car_2",
        Sprite::FlyingCar(CarModel::Boxy),
        (40, 20),
    ));
    e.push(Entry::idle("Backgrounds/Decorations", "smog_cloud", Sprite::SmogCloud, (128, 64)));

    e
}

fn top_down() -> Vec<Entry> {
    let mut e = Vec::new();

    player_states(&mut e, (64, 64));
    frames(&mut e, "Player/Effects", "engine_exhaust", Sprite::EngineExhaust, 4, (32, 32));

    e.push(Entry::idle(
        "Enemies/Helicopters",
        "enemy_scout",
        Sprite::Helicopter(Airframe::Scout),
        (48, 48),
    ));
    e.push(Entry::idle(
        "Enemies/Helicopters",
        "enemy_gunship",
        Sprite::Helicopter(Airframe::Gunship),
        (56, 56),
    ));
    e.push(Entry::idle("Enemies/Tanks", "tank_basic", Sprite::Tank(TankClass::Basic), (48, 48)));
    e.push(Entry::idle("Enemies/Tanks", "tank_heavy", Sprite::Tank(TankClass::Heavy), (56, 56)));
    e.push(Entry::idle("Enemies/Turrets", "turret_aa", Sprite::Turret, (48, 48)));
    e.push(Entry::idle("Enemies/Drones", "drone_small", Sprite::Drone, (32, 32)));
    e.push(Entry::idle("Enemies/Boss", "boss_gunship", Sprite::Boss, (96, 96)));

    for (kind, label) in [
        (BuildingKind::Small, "small"),
        (BuildingKind::Tall, "tall"),
        (BuildingKind::Corp, "corp"),
        (BuildingKind::Slum, "slum"),
    ] {
        e.push(Entry::idle(
            "Environment/Buildings",
            format!("building_{label}"),
            Sprite::Building(kind),
            (80, 80),
        ));
    }
    e.push(Entry::idle(
        "Environment/Roads",
        "road_straight",
        Sprite::Road(RoadKind::Straight),
        (64, 64),
    ));
    e.push(Entry::idle(
        "Environment/Roads",
        "road_intersection",
        Sprite::Road(RoadKind::Intersection),
        (64, 64),
    ));
    e.push(Entry::idle("Environment/Bridges", "bridge_section", Sprite::Bridge, (64, 64)));
    e.push(Entry::idle(
        "Environment/Rooftops",
        "ac_unit",
        Sprite::Rooftop(RooftopKind::AcUnit),
        (32, 32),
    ));
    e.push(Entry::idle(
        "Environment/Rooftops",
        "antenna",
        Sprite::Rooftop(RooftopKind::Antenna),
        (32, 32),
    ));

    for ((magnitude, label), side) in MAGNITUDES.into_iter().zip([48, 64, 96]) {
        let stem = format!("explosion_{label}");
        frames(&mut e, "Effects/Explosions", &stem, Sprite::Explosion(magnitude), 4, (side, side));
    }
    frames(
        &mut e,
        "Effects/MuzzleFlashes",
        "muzzle_machinegun",
        Sprite::MuzzleFlash(Weapon::MachineGun),
        3,
        (32, 32),
    );
    frames(
        &mut e,
        "Effects/MuzzleFlashes",
        "muzzle_missile",
        Sprite::MuzzleFlash(Weapon::Missile),
        3,
        (32, 32),
    );
    for (kind, label) in [
        (Projectile::Player, "player"),
        (Projectile::Enemy, "enemy"),
        (Projectile::Missile, "missile"),
    ] {
        e.push(Entry::idle(
            "Effects/Bullets",
            format!("bullet_{label}"),
            Sprite::Bullet(kind),
            (16, 16),
        ));
    }
    frames(&mut e, "Effects/Trails", "trail", Sprite::Trail, 4, (32, 32));
    e.push(Entry::idle("Effects/Shields", "shield_energy", Sprite::Shield, (64, 64)));
    for (kind, label) in [
        (Weather::Smoke, "smoke"),
        (Weather::Fire, "fire"),
        (Weather::Rain, "rain"),
    ] {
        e.push(Entry::idle("Effects/Weather", label, Sprite::Weather(kind), (64, 64)));
    }

    for (depth, label) in [(Depth::Far, "far"), (Depth::Mid, "mid"), (Depth::Near, "near")] {
        e.push(Entry::idle(
            "Backgrounds/Parallax",
            format!("parallax_{label}"),
            Sprite::Parallax(depth),
            (256, 256),
        ));
    }
    for (kind, label) in SKIES {
        e.push(Entry::idle(
            "Backgrounds/Skies",
            format!("sky_{label}"),
            Sprite::Sky(kind),
            (256, 256),
        ));
    }
    e.push(Entry::idle(
        "Backgrounds/Decorations",
        "flying_car_1",
        Sprite::FlyingCar(CarModel::Sleek),
        (64, 32),
    ));
    e.push(Entry::idle(
        "Backgrounds/Decorations",
        "flying_car_2",
        Sprite::FlyingCar(CarModel::Boxy),
        (64, 32),
    ));
    e.push(Entry::idle("Backgrounds/Decorations", "smog_cloud", Sprite::SmogCloud, (64, 64)));

    e.push(Entry::idle("UI/Buttons", "button_normal", Sprite::Widget(Widget::Button), (96, 48)));
    e.push(Entry::new(
        "UI/Buttons",
        "button_hover",
        Sprite::Widget(Widget::Button),
        State::Hover,
        (96, 48),
    ));
    e.push(Entry::idle("UI/HUD", "healthbar_bg", Sprite::Widget(Widget::HealthbarBg), (128, 16)));
    e.push(Entry::idle(
        "UI/HUD",
        "healthbar_fill",
        Sprite::Widget(Widget::HealthbarFill),
        (128, 16),
    ));
    e.push(Entry::idle("UI/HUD", "hud_corner", Sprite::Widget(Widget::HudCorner), (32, 32)));
    e.push(Entry::idle("UI", "minimap_frame", Sprite::Widget(Widget::MinimapFrame), (64, 64)));
    e.push(Entry::idle("UI", "minimap_player", Sprite::Widget(Widget::MinimapPlayer), (16, 16)));
    e.push(Entry::idle("UI", "minimap_enemy", Sprite::Widget(Widget::MinimapEnemy), (16, 16)));
    for (icon, label) in ICONS {
        e.push(Entry::idle(
            "UI/Icons",
            format!("icon_{label}"),
            Sprite::Widget(Widget::Icon(icon)),
            (32, 32),
        ));
    }

    e
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_names_are_unique() {
        for style in Style::ALL {
            check_unique(&catalog(style)).unwrap();
        }
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let mut entries = catalog(Style::TopDown);
        let first = entries[0].clone();
        entries.push(first);
        assert!(matches!(check_unique(&entries), Err(AssetError::Build { .. })));
    }

    #[test]
    fn test_every_entry_builds_at_declared_size() {
        for style in Style::ALL {
            let palette = style.palette().build();
            for entry in catalog(style) {
                let canvas = sprites::build(style, entry.sprite, entry.state, entry.size, &palette)
                    .unwrap_or_else(|e| panic!("{style} {}: {e}", entry.name));
                assert_eq!(canvas.size(), entry.size, "{}", entry.name);
            }
        }
    }

    #[test]
    fn test_explosion_names_encode_frame() {
        let names: Vec<String> = catalog(Style::SideView)
            .into_iter()
            .filter(|e| e.name.starts_with("explosion_medium"))
            .map(|e| e.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "explosion_medium_0",
                "explosion_medium_1",
                "explosion_medium_2",
                "explosion_medium_3"
            ]
        );
    }

    #[test]
    fn test_base_path_joins_category() {
        let entry = catalog(Style::TopDown)
            .into_iter()
            .find(|e| e.name == "minimap_frame")
            .unwrap();
        assert_eq!(entry.base_path(), PathBuf::from("UI/minimap_frame"));
        assert_eq!(entry.size, (64, 64));
    }
}
