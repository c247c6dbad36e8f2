use std::sync::mpsc;

use arbor::engine::ArborEngine;
use arbor::input::{ControlEvent, InputProcessor};
use arbor::options::Options;
use arbor::util::frame_timing::FrameTiming;
use arbor::wish::{self, WishClient};

struct Args {
    preset: Option<String>,
    frames: u32,
    flip_every: u32,
    wish_keyword: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        preset: None,
        frames: 900,
        flip_every: 300,
        wish_keyword: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--frames needs a value".to_string())?;
                args.frames = value
                    .parse()
                    .map_err(|e| format!("bad --frames value: {}", e))?;
            }
            "--flip-every" => {
                let value = iter.next().ok_or_else(|| {
                    "--flip-every needs a value".to_string()
                })?;
                args.flip_every = value
                    .parse()
                    .map_err(|e| format!("bad --flip-every value: {}", e))?;
            }
            "--wish" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--wish needs a keyword".to_string())?;
                args.wish_keyword = Some(value);
            }
            other if args.preset.is_none() => {
                args.preset = Some(other.to_string());
            }
            other => {
                return Err(format!("unexpected argument: {}", other));
            }
        }
    }
    Ok(args)
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!(
                "{e}\nUsage: arbor [PRESET.toml] [--frames N] \
                 [--flip-every N] [--wish KEYWORD]"
            );
            std::process::exit(1);
        }
    };

    let options = match &args.preset {
        Some(path) => match Options::load(std::path::Path::new(path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load preset {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut engine = ArborEngine::new(options);
    let mut processor = InputProcessor::new();
    log::info!(
        "scene ready: {} instances, {} foliage points",
        engine.scene().instance_count(),
        engine.scene().foliage().len(),
    );

    // Fire-and-forget wish submission; the tree scatters while the
    // request is pending and re-forms on completion.
    let mut wish_rx = None;
    if let Some(keyword) = args.wish_keyword {
        let client = WishClient::new(&engine.options().wish);
        let (tx, rx) = mpsc::channel();
        match wish::submit_background(client, keyword, tx) {
            Ok(_) => {
                processor
                    .handle_event(&mut engine, ControlEvent::WishPending(true));
                wish_rx = Some(rx);
            }
            Err(e) => log::error!("wish submission failed: {}", e),
        }
    }

    let mut timing = FrameTiming::new(60);
    let mut frame: u32 = 0;
    while frame < args.frames {
        if !timing.should_render() {
            std::thread::sleep(std::time::Duration::from_micros(500));
            continue;
        }

        let finished = wish_rx.as_ref().and_then(|rx| rx.try_recv().ok());
        if let Some(wish) = finished {
            log::info!("\u{201c}{}\u{201d} — {}", wish.message, wish.signature);
            processor
                .handle_event(&mut engine, ControlEvent::WishPending(false));
            wish_rx = None;
        }

        // Periodic scatter/re-form demo flips, paused while a wish is
        // pending so the loading cue stays visible.
        if args.flip_every > 0
            && frame > 0
            && frame % args.flip_every == 0
            && wish_rx.is_none()
        {
            processor.handle_event(&mut engine, ControlEvent::ToggleForm);
        }

        engine.step(timing.elapsed_seconds());
        timing.end_frame();

        if frame % 120 == 0 {
            log::info!(
                "frame {}: morph {:.3} targeting {:?}, {:.0} fps",
                frame,
                engine.morph().current(),
                engine.tree_state(),
                timing.fps(),
            );
        }
        frame += 1;
    }

    log::info!(
        "done: {} frames, final morph {:.3}",
        args.frames,
        engine.morph().current()
    );
}
