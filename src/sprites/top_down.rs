//! Top-down catalog art, drawn as seen from straight overhead.
//!
//! Helicopters read as rotor discs, buildings as roofs and vehicles as
//! hulls with the turret on top.

use crate::error::Result;
use crate::render::{Axis, Canvas, Glow, Point, Primitive};
use crate::types::{Colour, Palette};

use super::{
    centre, frame_of, idle_only, polar, unsupported_state, unsupported_style, Airframe,
    BuildingKind, CarModel, Depth, Icon, Magnitude, Projectile, RoadKind, RooftopKind, SkyKind,
    Sprite, State, Style, TankClass, Weapon, Weather, Widget,
};

palette_tones!(
    bg,
    cyan,
    cyan_dark,
    pink,
    purple,
    purple_dark,
    green,
    yellow,
    orange,
    red,
    red_dark,
    white,
    gray,
    gray_dark,
    gray_light,
    building,
    building_dark,
    window,
    window_dark,
    metal,
    metal_dark,
);

const ROAD: Colour = Colour::rgb(35, 35, 45);
const EXHAUST_SMOKE: Colour = Colour::rgb(180, 180, 190);
const SMOKE: Colour = Colour::rgb(100, 100, 110);
const SKYLINE_FAR: Colour = Colour::rgb(20, 20, 35);
const SKYLINE_MID: Colour = Colour::rgb(25, 25, 40);
const SKYLINE_NEAR: Colour = Colour::rgb(30, 30, 50);

pub(super) fn build(
    sprite: Sprite,
    state: State,
    size: (u32, u32),
    palette: &Palette,
) -> Result<Canvas> {
    let t = Tones::resolve(palette)?;
    let mut canvas = match sprite {
        Sprite::Parallax(_) => Canvas::filled(size.0, size.1, t.bg),
        _ => Canvas::new(size.0, size.1),
    };
    let c = &mut canvas;

    match sprite {
        Sprite::Helicopter(Airframe::Player) => match state {
            State::Idle | State::BankLeft | State::BankRight | State::Damaged => {
                helicopter(c, &t, t.metal, t.cyan, state)
            }
            other => return Err(unsupported_state(sprite, other)),
        },
        Sprite::Helicopter(Airframe::Scout) => {
            idle_only(sprite, state)?;
            helicopter(c, &t, t.gray_dark, t.pink, state);
        }
        Sprite::Helicopter(Airframe::Gunship) => {
            idle_only(sprite, state)?;
            helicopter(c, &t, t.building_dark, t.red, state);
        }
        Sprite::EngineExhaust => engine_exhaust(c, frame_of(sprite, state, 4)?),
        Sprite::Tank(class) => {
            idle_only(sprite, state)?;
            tank(c, &t, class);
        }
        Sprite::Turret => {
            idle_only(sprite, state)?;
            turret(c, &t);
        }
        Sprite::Drone => {
            idle_only(sprite, state)?;
            drone(c, &t);
        }
        Sprite::Boss => {
            idle_only(sprite, state)?;
            boss(c, &t);
        }
        Sprite::Building(kind) => {
            idle_only(sprite, state)?;
            building(c, &t, kind);
        }
        Sprite::Slum => return Err(unsupported_style(sprite, Style::TopDown)),
        Sprite::Road(kind) => {
            idle_only(sprite, state)?;
            road(c, &t, kind);
        }
        Sprite::Bridge => {
            idle_only(sprite, state)?;
            bridge(c, &t);
        }
        Sprite::Rooftop(kind) => {
            idle_only(sprite, state)?;
            rooftop(c, &t, kind);
        }
        Sprite::Explosion(size) => explosion(c, &t, size, frame_of(sprite, state, 4)?),
        Sprite::MuzzleFlash(weapon) => muzzle_flash(c, &t, weapon, frame_of(sprite, state, 3)?),
        Sprite::Bullet(kind) => {
            idle_only(sprite, state)?;
            bullet(c, &t, kind);
        }
        Sprite::Trail => trail(c, &t, frame_of(sprite, state, 4)?),
        Sprite::Shield => {
            idle_only(sprite, state)?;
            shield(c, &t);
        }
        Sprite::Weather(kind) => {
            idle_only(sprite, state)?;
            weather(c, &t, kind);
        }
        Sprite::SmogCloud => {
            idle_only(sprite, state)?;
            weather(c, &t, Weather::Smoke);
        }
        Sprite::Parallax(depth) => {
            idle_only(sprite, state)?;
            parallax(c, &t, depth);
        }
        Sprite::Sky(kind) => {
            idle_only(sprite, state)?;
            sky(c, kind);
        }
        Sprite::FlyingCar(model) => {
            idle_only(sprite, state)?;
            flying_car(c, &t, model);
        }
        Sprite::Widget(Widget::Button) => match state {
            State::Idle | State::Hover => button(c, &t, state == State::Hover),
            other => return Err(unsupported_state(sprite, other)),
        },
        Sprite::Widget(widget) => {
            idle_only(sprite, state)?;
            widget_chrome(c, &t, widget);
        }
    }

    Ok(canvas)
}

/// Soft disc used for engines and lamps.
fn glow_circle(c: &mut Canvas, centre: Point, radius: i32, colour: Colour, spread: i32) {
    Glow::circle(centre, radius, colour)
        .spread(spread)
        .intensity(40)
        .draw(c);
}

/// Translucent spinning rotor, squashed to an oval, with a solid hub.
fn rotor_disc(c: &mut Canvas, t: &Tones, centre: Point, radius: i32, colour: Colour) {
    let (cx, cy) = centre;
    Glow::ellipse([cx - radius, cy - radius / 2, cx + radius, cy + radius / 2], colour)
        .spread(8)
        .intensity(36)
        .core(colour.with_alpha(60))
        .draw(c);
    c.draw(Primitive::circle(centre, 4).fill(t.gray));
}

fn helicopter(c: &mut Canvas, t: &Tones, hull: Colour, accent: Colour, state: State) {
    let (cx, cy) = centre(c.size());
    let tilt: i32 = match state {
        State::BankLeft => -3,
        State::BankRight => 3,
        _ => 0,
    };
    let x = cx + tilt;
    // the tail swings half as far as the nose
    let tx = cx + tilt.div_euclid(2);
    let hull = if state == State::Damaged { hull.darken(30.0) } else { hull };

    rotor_disc(c, t, (x, cy - 8), 28, accent);

    c.draw(
        Primitive::polygon(vec![
            (x - 4, cy + 5),
            (x + 4, cy + 5),
            (tx + 3, cy + 35),
            (tx - 3, cy + 35),
        ])
            .fill(hull)
            .outline(t.gray_dark),
    );
    c.draw(Primitive::ellipse([tx - 6, cy + 32, tx + 6, cy + 40]).fill(t.gray));
    c.draw(Primitive::ellipse([tx - 3, cy + 34, tx + 3, cy + 38]).fill(t.gray_light));

    c.draw(
        Primitive::polygon(vec![
            (x - 12, cy - 15),
            (x + 12, cy - 15),
            (x + 14, cy + 5),
            (tx + 8, cy + 20),
            (tx - 8, cy + 20),
            (x - 14, cy + 5),
        ])
        .fill(hull)
        .outline(accent),
    );

    // canopy
    c.draw(Primitive::ellipse([x - 8, cy - 12, x + 8, cy + 2]).fill(t.cyan_dark));
    c.draw(Primitive::ellipse([x - 6, cy - 10, x + 6, cy]).fill(t.cyan));

    c.draw(Primitive::rect([x - 6, cy + 5, x + 6, cy + 12]).fill(t.metal_dark));
    if state == State::Damaged {
        glow_circle(c, (x, cy + 8), 3, t.red, 4);
    } else {
        glow_circle(c, (x, cy + 8), 3, accent, 6);
    }

    // skids
    let (skid_top, skid_bottom) = (cy + 15, cy + 18);
    c.draw(
        Primitive::polyline(
            vec![(x - 12, skid_top), (tx - 8, skid_bottom), (tx + 2, skid_bottom)],
            2,
        )
        .fill(t.metal),
    );
    c.draw(
        Primitive::polyline(
            vec![(x + 12, skid_top), (tx + 8, skid_bottom), (tx - 2, skid_bottom)],
            2,
        )
        .fill(t.metal),
    );

    c.draw(Primitive::rect([x - 16, cy - 2, x - 12, cy + 6]).fill(t.metal_dark));
    c.draw(Primitive::rect([x + 12, cy - 2, x + 16, cy + 6]).fill(t.metal_dark));
    c.draw(Primitive::line((x, cy - 10), (x, cy + 15), 1).fill(accent));

    if state == State::Damaged {
        c.draw(Primitive::line((x - 8, cy - 5), (x - 2, cy + 5), 2).fill(t.red));
        c.draw(Primitive::line((x + 5, cy - 8), (x + 10, cy - 2), 2).fill(t.red));
        c.draw(Primitive::ellipse([x - 3, cy + 10, x + 3, cy + 16]).fill(t.orange));
    }
}

fn engine_exhaust(c: &mut Canvas, frame: u32) {
    let (cx, cy) = centre(c.size());
    let f = frame as i32;
    let puffs = [(0, 5 + f * 3), (-3, 10 + f * 4), (3, 12 + f * 3), (0, 18 + f * 5)];

    for (i, (ox, oy)) in puffs.into_iter().enumerate() {
        let i = i as i32;
        let r = 4 + i * 2;
        let alpha = 150 - i * 30 - f * 20;
        if alpha <= 0 {
            continue;
        }
        let puff = EXHAUST_SMOKE.with_alpha(alpha as u8);
        c.composite(|layer| layer.draw(Primitive::circle((cx + ox, cy + oy), r).fill(puff)));
    }
}

fn tank(c: &mut Canvas, t: &Tones, class: TankClass) {
    let (cx, cy) = centre(c.size());
    let (body, turret, accent, turret_r, barrel_w, barrel_l) = match class {
        TankClass::Basic => (t.gray_dark, t.gray, t.red, 14, 4, 16),
        TankClass::Heavy => (t.building_dark, t.metal_dark, t.orange, 18, 6, 22),
    };
    let (half_w, half_h) = (14, 18);

    c.draw(
        Primitive::rect([cx - half_w, cy - half_h, cx + half_w, cy + half_h])
            .fill(body)
            .outline(t.gray),
    );

    // treads
    c.draw(
        Primitive::rect([cx - half_w - 2, cy - half_h, cx - half_w + 4, cy + half_h])
            .fill(t.metal_dark)
            .outline(t.gray),
    );
    c.draw(
        Primitive::rect([cx + half_w - 4, cy - half_h, cx + half_w + 2, cy + half_h])
            .fill(t.metal_dark)
            .outline(t.gray),
    );
    for i in (-14..15).step_by(4) {
        c.draw(
            Primitive::line((cx - half_w - 2, cy + i), (cx - half_w + 4, cy + i), 1)
                .fill(t.gray),
        );
        c.draw(
            Primitive::line((cx + half_w - 4, cy + i), (cx + half_w + 2, cy + i), 1)
                .fill(t.gray),
        );
    }

    c.draw(Primitive::circle((cx, cy), turret_r).fill(turret).outline(accent));
    c.draw(
        Primitive::rect([
            cx - barrel_w / 2,
            cy - turret_r - barrel_l,
            cx + barrel_w / 2,
            cy - turret_r,
        ])
            .fill(t.metal)
            .outline(t.gray_dark),
    );
    c.draw(
        Primitive::rect([cx - 2, cy - turret_r - barrel_l - 3, cx + 2, cy - turret_r - barrel_l])
            .fill(accent),
    );

    c.draw(Primitive::circle((cx, cy), 6).fill(t.metal_dark));
    c.draw(Primitive::circle((cx, cy), 3).fill(accent));

    if class == TankClass::Heavy {
        c.draw(
            Primitive::rect([cx - 10, cy + 5, cx + 10, cy + 12])
                .fill(t.metal_dark)
                .outline(t.gray),
        );
        c.draw(
            Primitive::rect([cx + 8, cy - 5, cx + 14, cy - 2])
                .fill(t.metal)
                .outline(t.gray_dark),
        );
    }
}

fn turret(c: &mut Canvas, t: &Tones) {
    let (cx, cy) = centre(c.size());
    let base_r = 22;

    c.draw(Primitive::circle((cx, cy), base_r).fill(t.metal_dark).outline(t.gray));
    c.draw(Primitive::circle((cx, cy), base_r - 4).fill(t.building_dark).outline(t.gray_dark));

    // cross-shaped mount
    let (mount_w, mount_l) = (8, 18);
    c.draw(
        Primitive::rect([cx - mount_l, cy - mount_w / 2, cx + mount_l, cy + mount_w / 2])
            .fill(t.metal)
            .outline(t.cyan),
    );
    c.draw(
        Primitive::rect([cx - mount_w / 2, cy - mount_l, cx + mount_w / 2, cy + mount_l])
            .fill(t.metal)
            .outline(t.cyan),
    );

    c.draw(Primitive::circle((cx, cy), 8).fill(t.gray_dark).outline(t.cyan));
    c.draw(Primitive::circle((cx, cy), 4).fill(t.cyan));

    for angle in [0.0, 90.0, 180.0, 270.0] {
        let root = polar((cx, cy), angle, 8.0);
        let tip = polar((cx, cy), angle, 22.0);
        c.draw(Primitive::line(root, tip, 3).fill(t.metal));
        c.draw(Primitive::circle(tip, 3).fill(t.red));
    }
}

fn drone(c: &mut Canvas, t: &Tones) {
    let (cx, cy) = centre(c.size());
    let arm = 12;
    let rotors = [
        (cx - arm, cy - arm),
        (cx + arm, cy - arm),
        (cx - arm, cy + arm),
        (cx + arm, cy + arm),
    ];

    c.draw(Primitive::circle((cx, cy), 6).fill(t.gray_dark).outline(t.pink));
    c.draw(Primitive::circle((cx, cy), 3).fill(t.pink));

    for rotor in rotors {
        c.draw(Primitive::line((cx, cy), rotor, 2).fill(t.gray));
    }
    let blur = t.pink.with_alpha(80);
    for rotor in rotors {
        c.draw(Primitive::circle(rotor, 5).fill(blur));
        c.draw(Primitive::circle(rotor, 2).fill(t.pink));
    }
}

fn boss(c: &mut Canvas, t: &Tones) {
    let (cx, cy) = centre(c.size());

    rotor_disc(c, t, (cx - 25, cy - 10), 22, t.red);
    rotor_disc(c, t, (cx + 25, cy - 10), 22, t.red);

    c.draw(
        Primitive::polygon(vec![
            (cx - 35, cy - 20),
            (cx + 35, cy - 20),
            (cx + 40, cy + 10),
            (cx + 30, cy + 40),
            (cx - 30, cy + 40),
            (cx - 40, cy + 10),
        ])
        .fill(t.building_dark)
        .outline(t.red),
    );
    c.draw(
        Primitive::ellipse([cx - 15, cy - 15, cx + 15, cy + 25])
            .fill(t.metal_dark)
            .outline(t.red),
    );
    c.draw(Primitive::ellipse([cx - 10, cy - 10, cx + 10, cy + 8]).fill(t.red_dark));
    c.draw(Primitive::ellipse([cx - 6, cy - 6, cx + 6, cy + 4]).fill(t.red));

    // weapon pods with missile tubes
    for offset in [-28, 28] {
        c.draw(
            Primitive::rect([cx + offset - 8, cy + 5, cx + offset + 8, cy + 25])
                .fill(t.metal_dark)
                .outline(t.orange),
        );
        for i in 0..3 {
            let tube_y = cy + 8 + i * 5;
            c.draw(
                Primitive::ellipse([cx + offset - 4, tube_y - 2, cx + offset + 4, tube_y + 2])
                    .fill(t.orange),
            );
        }
    }

    c.draw(
        Primitive::polygon(vec![
            (cx - 20, cy + 35),
            (cx + 20, cy + 35),
            (cx + 15, cy + 55),
            (cx - 15, cy + 55),
        ])
            .fill(t.metal_dark)
            .outline(t.red),
    );
    c.draw(Primitive::ellipse([cx - 20, cy + 50, cx - 10, cy + 60]).fill(t.gray));
    c.draw(Primitive::ellipse([cx + 10, cy + 50, cx + 20, cy + 60]).fill(t.gray));

    for offset in [-15, 0, 15] {
        glow_circle(c, (cx + offset, cy + 30), 4, t.orange, 8);
    }
}

fn building(c: &mut Canvas, t: &Tones, kind: BuildingKind) {
    let (cx, cy) = centre(c.size());
    let (w, h, roof, trim) = match kind {
        BuildingKind::Small => (50, 50, t.building, t.window),
        BuildingKind::Tall => (60, 60, t.building_dark, t.cyan),
        BuildingKind::Corp => (70, 70, t.metal_dark, t.purple),
        BuildingKind::Slum => (55, 45, t.gray_dark, t.yellow),
    };
    let (x0, y0, x1, y1) = (cx - w / 2, cy - h / 2, cx + w / 2, cy + h / 2);

    if kind == BuildingKind::Slum {
        c.draw(
            Primitive::polygon(vec![(x0, y0), (x1 - 5, y0 + 3), (x1, y1 - 5), (x0 + 8, y1)])
                .fill(roof)
                .outline(t.gray),
        );
    } else {
        c.draw(Primitive::rect([x0, y0, x1, y1]).fill(roof).outline(t.gray));
    }

    match kind {
        BuildingKind::Small => {
            c.draw(Primitive::rect([cx - 8, cy - 8, cx + 8, cy + 8]).fill(t.metal_dark));
            c.draw(Primitive::rect([cx - 6, cy - 10, cx + 6, cy - 8]).fill(t.gray));
            c.draw(Primitive::rect([cx - 15, cy + 10, cx - 5, cy + 18]).fill(t.gray_dark));
            // skylight
            c.draw(Primitive::rect([cx + 6, cy + 10, cx + 14, cy + 16]).fill(trim));
        }
        BuildingKind::Tall => {
            c.draw(Primitive::rect([cx - 20, cy - 20, cx - 5, cy - 5]).fill(t.metal_dark));
            c.draw(Primitive::rect([cx + 5, cy - 20, cx + 20, cy - 5]).fill(t.metal_dark));
            c.draw(Primitive::line((cx, cy - 30), (cx, y0), 2).fill(t.gray));
            glow_circle(c, (cx, cy - 30), 3, t.red, 3);
            // helipad H
            c.draw(Primitive::line((cx - 8, cy + 10), (cx - 8, cy + 25), 3).fill(t.yellow));
            c.draw(Primitive::line((cx + 8, cy + 10), (cx + 8, cy + 25), 3).fill(t.yellow));
            c.draw(Primitive::line((cx - 8, cy + 17), (cx + 8, cy + 17), 3).fill(t.yellow));
        }
        BuildingKind::Corp => {
            c.draw(Primitive::circle((cx, cy), 15).outline(t.yellow).width(2));
            c.draw(Primitive::line((cx - 8, cy), (cx + 8, cy), 2).fill(t.yellow));
            c.draw(Primitive::line((cx, cy - 8), (cx, cy + 8), 2).fill(t.yellow));
            for angle in [0.0, 72.0, 144.0, 216.0, 288.0] {
                let dish = polar((cx, cy), angle, 20.0);
                c.draw(Primitive::line((cx, cy), dish, 1).fill(t.gray));
                c.draw(Primitive::circle(dish, 2).fill(t.red));
            }
            c.draw(Primitive::ellipse([cx + 15, cy - 25, cx + 25, cy - 15]).fill(t.metal));
            c.draw(Primitive::line((cx + 20, cy - 20), (cx + 20, cy - 30), 2).fill(t.gray));
        }
        BuildingKind::Slum => {
            c.draw(Primitive::rect([cx - 10, cy - 5, cx - 2, cy + 5]).fill(t.gray));
            c.draw(Primitive::rect([cx + 5, cy - 10, cx + 15, cy - 2]).fill(t.metal_dark));
            c.draw(Primitive::line((x0 + 5, y0 + 10), (x1 - 10, y1 - 5), 3).fill(t.gray_dark));
            // one lit hatch
            c.draw(Primitive::rect([cx - 18, cy + 8, cx - 12, cy + 12]).fill(trim));
        }
    }

    // neon edges on the tall towers
    if matches!(kind, BuildingKind::Tall | BuildingKind::Corp) {
        c.draw(Primitive::rect([x0, y0, x0 + 2, y1]).fill(trim));
        c.draw(Primitive::rect([x1 - 2, y0, x1, y1]).fill(trim));
    }
}

fn road(c: &mut Canvas, t: &Tones, kind: RoadKind) {
    let (cx, cy) = centre(c.size());
    let (w, h) = (c.width() as i32, c.height() as i32);

    c.draw(Primitive::rect([cx - 20, 0, cx + 20, h - 1]).fill(ROAD));
    match kind {
        RoadKind::Straight => {
            for y in (0..h).step_by(20) {
                c.draw(Primitive::rect([cx - 2, y, cx + 2, y + 10]).fill(t.yellow));
            }
            c.draw(Primitive::line((cx - 20, 0), (cx - 20, h - 1), 1).fill(t.white));
            c.draw(Primitive::line((cx + 20, 0), (cx + 20, h - 1), 1).fill(t.white));
        }
        RoadKind::Intersection => {
            c.draw(Primitive::rect([0, cy - 20, w - 1, cy + 20]).fill(ROAD));
            c.draw(Primitive::circle((cx, cy), 5).fill(t.yellow));
        }
    }
}

fn bridge(c: &mut Canvas, t: &Tones) {
    let cx = c.width() as i32 / 2;
    let h = c.height() as i32;

    c.draw(Primitive::rect([cx - 12, 0, cx + 12, h - 1]).fill(t.metal_dark));
    for y in (20..h).step_by(40) {
        c.draw(Primitive::line((cx - 15, y), (cx - 12, y), 2).fill(t.gray));
        c.draw(Primitive::line((cx + 12, y), (cx + 15, y), 2).fill(t.gray));
    }
    for y in (0..h).step_by(15) {
        c.draw(Primitive::rect([cx - 1, y, cx + 1, y + 7]).fill(t.yellow));
    }
}

fn rooftop(c: &mut Canvas, t: &Tones, kind: RooftopKind) {
    let (cx, cy) = centre(c.size());

    match kind {
        RooftopKind::AcUnit => {
            c.draw(
                Primitive::rect([cx - 10, cy - 8, cx + 10, cy + 8])
                    .fill(t.metal_dark)
                    .outline(t.gray),
            );
            c.draw(Primitive::ellipse([cx - 6, cy - 4, cx + 6, cy + 4]).fill(t.gray));
            c.draw(Primitive::line((cx - 6, cy), (cx + 6, cy), 1).fill(t.metal));
            c.draw(Primitive::line((cx, cy - 4), (cx, cy + 4), 1).fill(t.metal));
            c.draw(Primitive::rect([cx - 3, cy - 12, cx + 3, cy - 8]).fill(t.gray));
        }
        RooftopKind::Antenna => {
            c.draw(Primitive::rect([cx - 4, cy - 4, cx + 4, cy + 4]).fill(t.metal_dark));
            c.draw(Primitive::line((cx, cy), (cx, cy - 25), 2).fill(t.gray));
            for y in [cy - 8, cy - 15, cy - 22] {
                c.draw(Primitive::line((cx - 6, y), (cx + 6, y), 1).fill(t.gray));
            }
            c.draw(Primitive::circle((cx, cy - 25), 2).fill(t.red));
        }
    }
}

fn explosion(c: &mut Canvas, t: &Tones, size: Magnitude, frame: u32) {
    let (cx, cy) = centre(c.size());
    let (max_r, colours) = match size {
        Magnitude::Small => (15, vec![t.white, t.yellow, t.orange, t.red]),
        Magnitude::Medium => (25, vec![t.white, t.yellow, t.orange, t.red, t.red_dark]),
        Magnitude::Large => (40, vec![t.white, t.yellow, t.orange, t.red, t.red_dark, t.purple]),
    };

    // expand over the first frames, then burn out
    let grow = [0.55, 0.8, 1.0, 1.0][frame as usize];
    let fade = [1.0, 1.0, 0.8, 0.55][frame as usize];
    let reach = (max_r as f32 * grow).round() as i32;
    let step = reach / colours.len() as i32;

    for (i, colour) in colours.iter().enumerate() {
        let i = i as i32;
        let r = reach - i * step;
        let alpha = ((200 - i * 30) as f32 * fade) as u8;
        let ring = colour.with_alpha(alpha);
        c.composite(|layer| layer.draw(Primitive::circle((cx, cy), r).fill(ring)));
    }

    let spark = t.yellow.with_alpha((255.0 * fade) as u8);
    for angle in (0..360).step_by(30) {
        let from = polar((cx, cy), angle as f32, (reach / 3) as f32);
        let to = polar((cx, cy), angle as f32, reach as f32);
        c.draw(Primitive::line(from, to, 2).fill(spark));
    }
}

fn muzzle_flash(c: &mut Canvas, t: &Tones, weapon: Weapon, frame: u32) {
    let (cx, cy) = centre(c.size());
    let flicker = [1.0, 1.25, 0.75][frame as usize];
    let origin = (cx, cy - 5);

    match weapon {
        Weapon::MachineGun => {
            for angle in [-20.0, 0.0, 20.0] {
                let tip = polar((cx, cy), angle - 90.0, 12.0 * flicker);
                c.draw(Primitive::line(origin, tip, 2).fill(t.yellow));
            }
            c.draw(Primitive::ellipse([cx - 4, cy - 6, cx + 4, cy + 2]).fill(t.orange));
        }
        Weapon::Missile => {
            for angle in (-30..=30).step_by(10) {
                let tip = polar((cx, cy), angle as f32 - 90.0, 18.0 * flicker);
                c.draw(Primitive::line(origin, tip, 3).fill(t.orange));
            }
            c.draw(Primitive::ellipse([cx - 6, cy - 8, cx + 6, cy + 4]).fill(t.red));
            c.draw(Primitive::ellipse([cx - 3, cy - 5, cx + 3, cy + 1]).fill(t.yellow));
        }
    }
}

fn bullet(c: &mut Canvas, t: &Tones, kind: Projectile) {
    let (cx, cy) = centre(c.size());

    match kind {
        Projectile::Player | Projectile::Enemy => {
            let colour = if kind == Projectile::Player { t.cyan } else { t.red };
            c.draw(Primitive::circle((cx, cy), 2).fill(colour));
            c.draw(Primitive::line((cx, cy), (cx, cy + 6), 2).fill(colour.with_alpha(150)));
        }
        Projectile::Missile => {
            c.draw(Primitive::ellipse([cx - 3, cy - 6, cx + 3, cy + 6]).fill(t.orange));
            c.draw(Primitive::line((cx, cy + 4), (cx, cy + 10), 2).fill(t.red));
        }
    }
}

fn trail(c: &mut Canvas, t: &Tones, frame: u32) {
    let (cx, cy) = centre(c.size());
    let colours = [t.cyan, t.pink, t.purple, t.green];
    let colour = colours[frame as usize % colours.len()];

    for i in 0..5 {
        let alpha = (150 - i * 30) as u8;
        let r = 3 - i / 2;
        let puff = colour.with_alpha(alpha);
        c.composite(|layer| {
            layer.draw(
                Primitive::ellipse([cx - r, cy + i * 4, cx + r, cy + i * 4 + r * 2])
                    .fill(puff),
            )
        });
    }
}

fn shield(c: &mut Canvas, t: &Tones) {
    let (cx, cy) = centre(c.size());

    for i in 0..3 {
        let r = 20 - i * 5;
        let fill = t.cyan.with_alpha((100 - i * 30) as u8);
        let edge = t.cyan;
        c.composite(|layer| layer.draw(Primitive::circle((cx, cy), r).fill(fill).outline(edge)));
    }
}

fn weather(c: &mut Canvas, t: &Tones, kind: Weather) {
    let (cx, cy) = centre(c.size());
    let (w, h) = (c.width() as i32, c.height() as i32);

    match kind {
        Weather::Smoke => {
            for i in 0..5 {
                let (ox, oy) = ((i - 2) * 8, (i % 3) * 5);
                let r = 12 + i * 3;
                let puff = SMOKE.with_alpha((100 - i * 15) as u8);
                c.composite(|layer| {
                    layer.draw(Primitive::circle((cx + ox, cy + oy), r).fill(puff))
                });
            }
        }
        Weather::Fire => {
            for (i, colour) in [t.yellow, t.orange, t.red].into_iter().enumerate() {
                let i = i as i32;
                let r = 8 - i * 2;
                c.draw(Primitive::circle((cx, cy - i * 6), r).fill(colour));
            }
        }
        Weather::Rain => {
            let streak = t.cyan.with_alpha(80);
            c.composite(|layer| {
                for x in (0..w).step_by(10) {
                    for y in (0..h).step_by(15) {
                        layer.draw(Primitive::line((x, y), (x - 3, y + 8), 1).fill(streak));
                    }
                }
            });
        }
    }
}

fn parallax(c: &mut Canvas, t: &Tones, depth: Depth) {
    let (w, h) = (c.width() as i32, c.height() as i32);

    match depth {
        Depth::Far => {
            for i in (0..w).step_by(40) {
                let height = 30 + i % 60;
                c.draw(Primitive::rect([i, h - height, i + 35, h - 1]).fill(SKYLINE_FAR));
            }
        }
        Depth::Mid => {
            for i in (0..w).step_by(60) {
                let height = 50 + i % 80;
                c.draw(Primitive::rect([i, h - height, i + 50, h - 1]).fill(SKYLINE_MID));
                for wy in ((h - height + 10)..(h - 10)).step_by(15) {
                    if (i + wy) % 3 == 0 {
                        c.draw(Primitive::rect([i + 5, wy, i + 15, wy + 8]).fill(t.window_dark));
                    }
                }
            }
        }
        Depth::Near => {
            for i in (0..w).step_by(80) {
                let height = 80 + i % 100;
                c.draw(Primitive::rect([i, h - height, i + 70, h - 1]).fill(SKYLINE_NEAR));
                Glow::line((i, h - height), (i, h - 1), 2, t.purple)
                    .spread(2)
                    .intensity(60)
                    .draw(c);
            }
        }
    }
}

fn sky(c: &mut Canvas, kind: SkyKind) {
    let (top, bottom) = match kind {
        SkyKind::Night => (Colour::rgb(5, 5, 20), Colour::rgb(20, 20, 45)),
        SkyKind::Dusk => (Colour::rgb(40, 20, 60), Colour::rgb(120, 60, 80)),
        SkyKind::Storm => (Colour::rgb(15, 20, 25), Colour::rgb(40, 45, 55)),
    };
    let (w, h) = (c.width() as i32, c.height() as i32);
    c.gradient([0, 0, w - 1, h - 1], top, bottom, Axis::Vertical);
}

fn flying_car(c: &mut Canvas, t: &Tones, model: CarModel) {
    let (cx, cy) = centre(c.size());

    match model {
        CarModel::Sleek => {
            c.draw(Primitive::ellipse([cx - 20, cy - 6, cx + 20, cy + 6]).fill(t.metal_dark));
            c.draw(Primitive::ellipse([cx - 15, cy - 4, cx + 15, cy + 4]).fill(t.cyan_dark));
            c.draw(Primitive::ellipse([cx - 18, cy - 3, cx - 12, cy + 3]).fill(t.red));
            c.draw(Primitive::ellipse([cx + 12, cy - 3, cx + 18, cy + 3]).fill(t.cyan));
        }
        CarModel::Boxy => {
            c.draw(Primitive::rect([cx - 18, cy - 8, cx + 18, cy + 8]).fill(t.metal_dark));
            c.draw(Primitive::rect([cx - 12, cy - 5, cx + 12, cy + 5]).fill(t.purple_dark));
            c.draw(Primitive::ellipse([cx - 16, cy - 2, cx - 10, cy + 2]).fill(t.yellow));
            c.draw(Primitive::ellipse([cx + 10, cy - 2, cx + 16, cy + 2]).fill(t.green));
        }
    }
}

fn button(c: &mut Canvas, t: &Tones, hover: bool) {
    let (w, h) = (c.width() as i32, c.height() as i32);

    if hover {
        c.draw(
            Primitive::rounded_rect([4, 4, w - 4, h - 4], 8)
                .fill(t.cyan_dark)
                .outline(t.cyan)
                .width(3),
        );
        c.draw(Primitive::rounded_rect([6, 6, w - 6, h - 6], 6).outline(t.white));
    } else {
        c.draw(
            Primitive::rounded_rect([4, 4, w - 4, h - 4], 8)
                .fill(t.metal_dark)
                .outline(t.cyan)
                .width(2),
        );
        let inner = t.cyan.with_alpha(100);
        c.composite(|layer| {
            layer.draw(Primitive::rounded_rect([8, 8, w - 8, h - 8], 6).outline(inner))
        });
    }
}

fn widget_chrome(c: &mut Canvas, t: &Tones, widget: Widget) {
    let (cx, cy) = centre(c.size());
    let (w, h) = (c.width() as i32, c.height() as i32);

    match widget {
        Widget::HealthbarBg => {
            c.draw(Primitive::rect([0, 0, w - 1, h - 1]).fill(t.building_dark).outline(t.gray));
        }
        Widget::HealthbarFill => {
            c.draw(Primitive::rect([0, 0, w - 1, h - 1]).fill(t.green));
            let stripe = t.green.with_alpha(150);
            for y in (0..h).step_by(2) {
                c.draw(Primitive::line((0, y), (w - 1, y), 1).fill(stripe));
            }
        }
        Widget::HudCorner => {
            c.draw(Primitive::polyline(vec![(15, h - 1), (0, h - 1), (0, h - 15)], 2).fill(t.cyan));
            c.draw(Primitive::polyline(vec![(w - 15, 0), (w - 1, 0), (w - 1, 15)], 2).fill(t.cyan));
        }
        Widget::MinimapFrame => {
            c.draw(Primitive::rect([0, 0, w - 1, h - 1]).outline(t.cyan).width(2));
            c.draw(Primitive::rect([2, 2, w - 3, h - 3]).outline(t.cyan_dark));
        }
        Widget::MinimapPlayer => {
            c.draw(
                Primitive::polygon(vec![(cx, cy - 6), (cx - 5, cy + 4), (cx + 5, cy + 4)])
                    .fill(t.cyan),
            );
            c.draw(
                Primitive::polygon(vec![(cx, cy - 4), (cx - 3, cy + 2), (cx + 3, cy + 2)])
                    .fill(t.white),
            );
        }
        Widget::MinimapEnemy => {
            c.draw(Primitive::circle((cx, cy), 4).fill(t.red));
            c.draw(Primitive::circle((cx, cy), 2).fill(t.white));
        }
        Widget::Icon(Icon::Health) => {
            c.draw(Primitive::ellipse([cx - 8, cy - 2, cx + 8, cy + 14]).fill(t.red));
            c.draw(
                Primitive::polygon(vec![(cx, cy - 10), (cx - 6, cy - 2), (cx + 6, cy - 2)])
                    .fill(t.red),
            );
        }
        Widget::Icon(Icon::Missile) => {
            c.draw(Primitive::rect([cx - 3, cy - 8, cx + 3, cy + 8]).fill(t.orange));
            c.draw(
                Primitive::polygon(vec![(cx, cy - 12), (cx - 4, cy - 6), (cx + 4, cy - 6)])
                    .fill(t.orange),
            );
            c.draw(Primitive::line((cx, cy + 8), (cx, cy + 12), 2).fill(t.red));
        }
        Widget::Icon(Icon::MachineGun) => {
            c.draw(Primitive::rect([cx - 2, cy - 8, cx + 2, cy + 8]).fill(t.yellow));
            c.draw(Primitive::ellipse([cx - 2, cy - 10, cx + 2, cy - 6]).fill(t.yellow));
        }
        Widget::Button => {}
    }
}
