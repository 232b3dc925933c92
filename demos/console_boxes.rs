//! Five boxes bouncing around a walled arena in the terminal.
//!
//! Steer the red box with W A S D, quit with Q or Esc. Set `RUST_LOG=debug`
//! and redirect stderr to a file to watch the world's events.

#[path = "../tests/tracing.rs"]
mod tracing_helper;

use physix2d::{core::BodyHandle, PhysicsWorld, RigidBody, Vector2, WorldBounds};
use rand::Rng;
use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    ExecutableCommand, QueueableCommand,
};

const FRAME_DURATION: Duration = Duration::from_millis(33); // ~30 FPS
const TICK: f64 = 0.1;
const BOX_SIZE: f64 = 50.0;
const BOX_MASS: f64 = 2.0;
const STEER: f64 = 1.0;
const BOX_COLORS: [Color; 5] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
];

struct Screen {
    columns: u16,
    rows: u16,
}

impl Screen {
    /// Maps a world coordinate inside the arena to a terminal cell
    fn cell(&self, position: Vector2) -> (i32, i32) {
        let arena = WorldBounds::ARENA;
        let sx = (self.columns - 2) as f64 / (arena.max_x() - arena.min_x());
        let sy = (self.rows - 3) as f64 / (arena.max_y() - arena.min_y());
        (
            1 + ((position.x - arena.min_x()) * sx).floor() as i32,
            1 + ((position.y - arena.min_y()) * sy).floor() as i32,
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_helper::init_tracing();

    let mut world = PhysicsWorld::new();
    let mut rng = rand::thread_rng();

    let mut handles: Vec<BodyHandle> = Vec::new();
    for _ in 0..BOX_COLORS.len() {
        let position = Vector2::new(rng.gen_range(200.0..400.0), rng.gen_range(200.0..400.0));
        let body = RigidBody::new_dynamic(position, BOX_SIZE, BOX_SIZE, BOX_MASS)?;
        handles.push(world.add_body(body));
    }
    let player = handles[0];

    let mut stdout = stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(Hide)?;

    let result = run(&mut world, player, &handles, &mut stdout);

    // Restore the terminal even if the loop failed
    stdout.execute(ResetColor)?;
    stdout.execute(Show)?;
    terminal::disable_raw_mode()?;
    println!();

    result
}

fn run(
    world: &mut PhysicsWorld,
    player: BodyHandle,
    handles: &[BodyHandle],
    stdout: &mut Stdout,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut frame_time = Instant::now();

    loop {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let nudge = match key.code {
                KeyCode::Char('w') => Vector2::new(0.0, -STEER),
                KeyCode::Char('s') => Vector2::new(0.0, STEER),
                KeyCode::Char('a') => Vector2::new(-STEER, 0.0),
                KeyCode::Char('d') => Vector2::new(STEER, 0.0),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => continue,
            };

            let body = world.get_body_mut(player)?;
            body.set_velocity(body.get_velocity() + nudge);
        }

        world.step(TICK)?;
        draw(world, handles, stdout)?;

        let elapsed = frame_time.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
        frame_time = Instant::now();
    }
}

fn draw(
    world: &PhysicsWorld,
    handles: &[BodyHandle],
    stdout: &mut Stdout,
) -> Result<(), Box<dyn std::error::Error>> {
    let (columns, rows) = terminal::size()?;
    if columns < 10 || rows < 6 {
        return Ok(());
    }
    let screen = Screen { columns, rows };

    stdout.queue(Clear(ClearType::All))?;
    draw_walls(stdout, &screen)?;

    for (handle, color) in handles.iter().zip(BOX_COLORS) {
        let body = world.get_body(*handle)?;
        let bounds = body.get_bounds();
        let (left, top) = screen.cell(bounds.min);
        let (right, bottom) = screen.cell(bounds.max);

        stdout.queue(SetForegroundColor(color))?;
        for y in top.max(1)..bottom.max(top + 1).min(rows as i32 - 2) {
            for x in left.max(1)..right.max(left + 1).min(columns as i32 - 1) {
                stdout.queue(MoveTo(x as u16, y as u16))?.queue(Print('█'))?;
            }
        }
    }

    let velocity = world.get_body(handles[0])?.get_velocity();
    stdout
        .queue(ResetColor)?
        .queue(MoveTo(0, rows - 1))?
        .queue(Print(format!(
            "t={:.1} v=({:.2}, {:.2})  WASD steer, Q quit",
            world.get_time(),
            velocity.x,
            velocity.y
        )))?;

    stdout.flush()?;
    Ok(())
}

fn draw_walls(stdout: &mut Stdout, screen: &Screen) -> Result<(), std::io::Error> {
    let bottom = screen.rows - 2;

    stdout.queue(SetForegroundColor(Color::White))?;
    for x in 0..screen.columns {
        stdout.queue(MoveTo(x, 0))?.queue(Print('▬'))?;
        stdout.queue(MoveTo(x, bottom))?.queue(Print('▬'))?;
    }
    for y in 1..bottom {
        stdout.queue(MoveTo(0, y))?.queue(Print('▐'))?;
        stdout.queue(MoveTo(screen.columns - 1, y))?.queue(Print('▌'))?;
    }
    stdout.queue(ResetColor)?;

    Ok(())
}
