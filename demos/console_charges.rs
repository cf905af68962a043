use coulomb_sim::{
    bodies::{Body, BodyParams, DisplayAttrs, DisplayFlags},
    core::{Command, ManualScheduler, Renderer, SimulationConfig, World},
    InteractionMode, Vector2,
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{size, Clear, ClearType},
    ExecutableCommand, QueueableCommand,
};
use std::io::{stdout, Stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};

const FRAME_DURATION: Duration = Duration::from_millis(33); // ~30 FPS
const SIMULATION_DURATION: f64 = 20.0; // seconds
const CELL: f64 = 10.0; // world units per terminal cell

/// Draws bodies as characters, y pointing up
struct TerminalRenderer {
    out: Stdout,
    rows: u16,
    cols: u16,
}

impl TerminalRenderer {
    fn cell(&self, p: Vector2) -> Option<(u16, u16)> {
        let col = (p.x / CELL).round();
        let row = self.rows as f64 - 1.0 - (p.y / CELL).round();
        if col < 0.0 || row < 0.0 || col >= self.cols as f64 || row >= self.rows as f64 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn draw(&mut self, bodies: &[Body]) -> std::io::Result<()> {
        self.out.queue(Clear(ClearType::All))?;
        for body in bodies {
            match body {
                Body::Circle(circle) => {
                    let Some((col, row)) = self.cell(circle.get_position()) else {
                        continue;
                    };
                    let flags = circle.get_display().flags;
                    let (glyph, color) = if flags.contains(DisplayFlags::OUTLINED) {
                        ('◎', Color::Cyan)
                    } else if flags.contains(DisplayFlags::NEGATIVE) {
                        ('⊖', Color::Blue)
                    } else {
                        ('⊕', Color::Red)
                    };
                    self.out
                        .queue(MoveTo(col, row))?
                        .queue(SetForegroundColor(color))?
                        .queue(Print(glyph))?;
                }
                Body::Wall(wall) => {
                    let (start, end) = wall.get_segment();
                    let steps = (start.distance(&end) / CELL).ceil().max(1.0) as usize;
                    for i in 0..=steps {
                        let t = i as f64 / steps as f64;
                        let Some((col, row)) = self.cell(start + (end - start) * t) else {
                            continue;
                        };
                        self.out
                            .queue(MoveTo(col, row))?
                            .queue(SetForegroundColor(Color::White))?
                            .queue(Print('█'))?;
                    }
                }
            }
        }
        self.out.queue(ResetColor)?;
        self.out.flush()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, bodies: &[Body]) {
        if let Err(err) = self.draw(bodies) {
            log::error!("render failed: {}", err);
        }
    }
}

fn charge_display(charge: f64) -> DisplayAttrs {
    let display = DisplayAttrs::filled(if charge < 0.0 { "#0000ff" } else { "#ff0000" });
    if charge < 0.0 {
        display.with_flags(DisplayFlags::NEGATIVE)
    } else {
        display
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut out = stdout();
    out.execute(Hide)?;
    let (cols, rows) = size()?;

    let config = SimulationConfig {
        width: cols as f64 * CELL,
        height: rows as f64 * CELL,
        mode: InteractionMode::Attract,
        ..SimulationConfig::default()
    };
    let (width, height) = (config.width, config.height);
    let renderer = TerminalRenderer { out: stdout(), rows, cols };
    let mut world = World::with_collaborators(config, renderer, ManualScheduler::new())?;

    // a pinned positive charge in the middle, a tilted wall and a ring of charges
    world.add(
        Vector2::new(width / 2.0, height / 2.0),
        BodyParams::new(50.0, 40.0, 8.0)
            .pinned()
            .with_display(DisplayAttrs::filled("#ff8800").with_stroke("cyan").with_flags(DisplayFlags::OUTLINED)),
    )?;
    world.add_body(Body::wall(
        Vector2::new(width * 0.1, height * 0.2),
        Vector2::new(width * 0.4, height * 0.1),
        4.0,
        DisplayAttrs::filled("#ffffff"),
    )?);
    for i in 0..12 {
        let angle = i as f64 * std::f64::consts::TAU / 12.0;
        let charge = if i % 2 == 0 { -10.0 } else { 10.0 };
        let position = Vector2::new(width / 2.0, height / 2.0) + Vector2::from_angle(angle) * (height / 3.0);
        world.add(
            position,
            BodyParams::new(10.0, charge, 5.0)
                .with_velocity(-angle.sin() * 40.0, angle.cos() * 40.0)
                .with_display(charge_display(charge)),
        )?;
    }

    let sender = world.command_sender();
    world.toggle();

    let start = Instant::now();
    while start.elapsed().as_secs_f64() < SIMULATION_DURATION {
        let frame_start = Instant::now();
        let now = start.elapsed().as_secs_f64() * 1000.0;

        // flip to contact physics halfway through
        if now > SIMULATION_DURATION * 500.0 && world.get_mode() == InteractionMode::Attract {
            sender.send(Command::SetMode(InteractionMode::Collide));
        }

        if world.scheduler_mut().take_pending() {
            world.tick(now);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            sleep(FRAME_DURATION - elapsed);
        }
    }

    out.execute(Show)?;
    out.execute(MoveTo(0, rows.saturating_sub(1)))?;
    println!("temperature: {:.1}", world.temperature());
    Ok(())
}
