//! Tagged sprite identities.
//!
//! Every drawable thing is a [`Sprite`] value; sub-kinds pick the variant
//! of a family (which tank, which explosion). Builders dispatch on these
//! rather than on strings.

use std::fmt;

/// Helicopter body plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Airframe {
    Player,
    Scout,
    Gunship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TankClass {
    Basic,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingKind {
    Small,
    Tall,
    Corp,
    Slum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadKind {
    Straight,
    Intersection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RooftopKind {
    AcUnit,
    Antenna,
}

/// Explosion size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magnitude {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weapon {
    MachineGun,
    Missile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projectile {
    Player,
    Enemy,
    Missile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    Smoke,
    Fire,
    Rain,
}

/// Parallax layer distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    Far,
    Mid,
    Near,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkyKind {
    Night,
    Dusk,
    Storm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarModel {
    Sleek,
    Boxy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Health,
    Missile,
    MachineGun,
}

/// Interface chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    Button,
    HealthbarBg,
    HealthbarFill,
    HudCorner,
    MinimapFrame,
    MinimapPlayer,
    MinimapEnemy,
    Icon(Icon),
}

/// Something a builder knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Helicopter(Airframe),
    EngineExhaust,
    Tank(TankClass),
    Turret,
    Drone,
    Boss,
    Building(BuildingKind),
    /// Free-standing rundown block (side-view only).
    Slum,
    Road(RoadKind),
    Bridge,
    Rooftop(RooftopKind),
    Explosion(Magnitude),
    MuzzleFlash(Weapon),
    Bullet(Projectile),
    Trail,
    Shield,
    Weather(Weather),
    Parallax(Depth),
    Sky(SkyKind),
    FlyingCar(CarModel),
    SmogCloud,
    Widget(Widget),
}

impl Sprite {
    /// Stable identifier used in diagnostics and the asset manifest.
    pub fn name(&self) -> String {
        match self {
            Sprite::Helicopter(frame) => format!(
                "helicopter_{}",
                match frame {
                    Airframe::Player => "player",
                    Airframe::Scout => "scout",
                    Airframe::Gunship => "gunship",
                }
            ),
            Sprite::EngineExhaust => "engine_exhaust".to_string(),
            Sprite::Tank(class) => format!(
                "tank_{}",
                match class {
                    TankClass::Basic => "basic",
                    TankClass::Heavy => "heavy",
                }
            ),
            Sprite::Turret => "turret".to_string(),
            Sprite::Drone => "drone".to_string(),
            Sprite::Boss => "boss".to_string(),
            Sprite::Building(kind) => format!(
                "building_{}",
                match kind {
                    BuildingKind::Small => "small",
                    BuildingKind::Tall => "tall",
                    BuildingKind::Corp => "corp",
                    BuildingKind::Slum => "slum",
                }
            ),
            Sprite::Slum => "slum".to_string(),
            Sprite::Road(kind) => format!(
                "road_{}",
                match kind {
                    RoadKind::Straight => "straight",
                    RoadKind::Intersection => "intersection",
                }
            ),
            Sprite::Bridge => "bridge".to_string(),
            Sprite::Rooftop(kind) => format!(
                "rooftop_{}",
                match kind {
                    RooftopKind::AcUnit => "ac_unit",
                    RooftopKind::Antenna => "antenna",
                }
            ),
            Sprite::Explosion(size) => format!(
                "explosion_{}",
                match size {
                    Magnitude::Small => "small",
                    Magnitude::Medium => "medium",
                    Magnitude::Large => "large",
                }
            ),
            Sprite::MuzzleFlash(weapon) => format!(
                "muzzle_{}",
                match weapon {
                    Weapon::MachineGun => "machinegun",
                    Weapon::Missile => "missile",
                }
            ),
            Sprite::Bullet(kind) => format!(
                "bullet_{}",
                match kind {
                    Projectile::Player => "player",
                    Projectile::Enemy => "enemy",
                    Projectile::Missile => "missile",
                }
            ),
            Sprite::Trail => "trail".to_string(),
            Sprite::Shield => "shield".to_string(),
            Sprite::Weather(kind) => format!(
                "weather_{}",
                match kind {
                    Weather::Smoke => "smoke",
                    Weather::Fire => "fire",
                    Weather::Rain => "rain",
                }
            ),
            Sprite::Parallax(depth) => format!(
                "parallax_{}",
                match depth {
                    Depth::Far => "far",
                    Depth::Mid => "mid",
                    Depth::Near => "near",
                }
            ),
            Sprite::Sky(kind) => format!(
                "sky_{}",
                match kind {
                    SkyKind::Night => "night",
                    SkyKind::Dusk => "dusk",
                    SkyKind::Storm => "storm",
                }
            ),
            Sprite::FlyingCar(model) => format!(
                "flying_car_{}",
                match model {
                    CarModel::Sleek => "sleek",
                    CarModel::Boxy => "boxy",
                }
            ),
            Sprite::SmogCloud => "smog_cloud".to_string(),
            Sprite::Widget(widget) => match widget {
                Widget::Button => "button".to_string(),
                Widget::HealthbarBg => "healthbar_bg".to_string(),
                Widget::HealthbarFill => "healthbar_fill".to_string(),
                Widget::HudCorner => "hud_corner".to_string(),
                Widget::MinimapFrame => "minimap_frame".to_string(),
                Widget::MinimapPlayer => "minimap_player".to_string(),
                Widget::MinimapEnemy => "minimap_enemy".to_string(),
                Widget::Icon(icon) => format!(
                    "icon_{}",
                    match icon {
                        Icon::Health => "health",
                        Icon::Missile => "missile",
                        Icon::MachineGun => "machinegun",
                    }
                ),
            },
        }
    }
}

impl fmt::Display for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_names() {
        assert_eq!(Sprite::Helicopter(Airframe::Player).name(), "helicopter_player");
        assert_eq!(Sprite::Explosion(Magnitude::Large).to_string(), "explosion_large");
        assert_eq!(Sprite::Widget(Widget::Icon(Icon::MachineGun)).name(), "icon_machinegun");
        assert_eq!(Sprite::Rooftop(RooftopKind::AcUnit).name(), "rooftop_ac_unit");
    }
}
