use std::{
    io::{self, Write},
    thread,
    time::{Duration, Instant},
};

use clap::Parser;
use embedded_graphics_core::{
    geometry::{Point, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
};
use log::{debug, info, warn};
use roundy_core::{
    clock::{FixedClock, WallClock},
    direction::{DirectionSource, FixedDirection},
    palette::{Palette, PaletteVariant},
    scheduler::{TimerHandle, VirtualScheduler},
    watchface::{TickResult, Watchface},
};
use roundy_fb::{
    FrameBuffer,
    panel::{HEIGHT, WIDTH},
};

use args::Args;
use host::{RandomDirection, SystemClock};

#[path = "main/args.rs"]
mod args;
#[path = "main/host.rs"]
mod host;

/// Background step, background decay and digit step can all be pending.
const MAX_TIMERS: usize = 4;

type Face = Watchface<TimerHandle, BinaryColor>;

fn main() {
    env_logger::init();
    let args = Args::parse();

    let frame = Rectangle::new(Point::zero(), Size::new(WIDTH as u32, HEIGHT as u32));
    let palette = Palette::monochrome(PaletteVariant::from(args.palette));

    let clock: Box<dyn WallClock> = match args.time {
        Some(time) => Box::new(FixedClock::new(Some(time), args.use_24h)),
        None => Box::new(SystemClock::new(args.utc_offset, args.use_24h)),
    };
    let mut source: Box<dyn DirectionSource> = match args.direction.fixed() {
        Some(direction) => Box::new(FixedDirection(direction)),
        None => Box::new(RandomDirection),
    };

    let mut face = match Face::load(frame, palette, clock.is_24h_style()) {
        Ok(face) => face,
        Err(err) => {
            eprintln!("roundy: {err}");
            std::process::exit(1);
        }
    };

    let mut scheduler = VirtualScheduler::<MAX_TIMERS>::new();
    let mut fb = FrameBuffer::new();
    let mut frames = 0u32;

    face.tick(clock.as_ref());
    let direction = face.appear(source.as_mut(), &mut scheduler);
    info!(
        "roundy: sweeping {} with {:?} digits",
        direction.as_str(),
        face.digits().digits()
    );
    present(&mut face, &mut fb, &args, &mut frames);

    let started = Instant::now();
    while face.is_animating() {
        let Some(due) = scheduler.next_due() else {
            warn!("roundy: sweep stalled without a pending timer");
            break;
        };

        if !args.no_sleep {
            let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            if due > elapsed {
                thread::sleep(Duration::from_millis(due - elapsed));
            }
        }

        while let Some(fired) = scheduler.pop_due(due) {
            face.dispatch(fired, &mut scheduler);
        }
        if face.tick(clock.as_ref()) == TickResult::RenderRequested {
            debug!("roundy: time now {:?}", face.digits().digits());
        }

        present(&mut face, &mut fb, &args, &mut frames);
    }

    info!(
        "roundy: sweep finished after {} ms, {} frames",
        scheduler.now_ms(),
        frames
    );
    face.unload(&mut scheduler);
}

fn present(face: &mut Face, fb: &mut FrameBuffer, args: &Args, frames: &mut u32) {
    if !face.take_redraw() {
        return;
    }

    let Ok(()) = face.render(fb);
    *frames += 1;

    if !args.dump {
        return;
    }

    let mut text = String::new();
    if let Err(err) = fb.write_text(&mut text, args.dump_step, '#', '.') {
        warn!("roundy: frame {} text dump failed: {}", frames, err);
        return;
    }

    let mut out = io::stdout().lock();
    if let Err(err) = writeln!(out, "frame {}\n{}", frames, text) {
        warn!("roundy: stdout write failed: {}", err);
    }
}
