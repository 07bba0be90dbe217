//! Album API Demonstration
//!
//! This example walks through the album facade and the command interpreter.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Creating and editing shapes
//! 2. Snapshots as frozen copies
//! 3. Applying parsed commands one at a time
//! 4. Running a whole command batch

use shapealbum_core::{apply, parse_line, Album, AlbumReader, BatchOutcome, CommandInterpreter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Shape Album Demo ===\n");

    // ===== Part 1: Direct edits =====
    println!("## Part 1: Direct edits\n");

    let mut album = Album::new();
    album.add_shape("R", "rectangle")?;
    album.add_shape("O", "oval")?;
    album.move_shape("R", 200.0, 200.0)?;
    album.set_color("O", 0.0, 0.0, 1.0)?;
    println!("✓ Added R and O");

    let before = album.take_snapshot("Initial state");
    println!("✓ Took snapshot {}", before);

    // ===== Part 2: Snapshots do not follow live edits =====
    println!("\n## Part 2: Independence\n");

    album.move_shape("R", 300.0, 300.0)?;
    let captured = album.get_snapshot(before.as_str())?;
    let live = album.get_shape("R")?;
    println!(
        "captured R at {:?}, live R at {:?}",
        captured.shape("R").map(|s| s.position()),
        live.position()
    );

    // ===== Part 3: One command at a time =====
    println!("\n## Part 3: Parsed commands\n");

    if let Some(cmd) = parse_line("resize O 60 30")? {
        apply(&mut album, cmd)?;
        println!("✓ Resized O");
    }
    album.take_snapshot("After resize");

    // ===== Part 4: Batch with a failing line =====
    println!("\n## Part 4: Batch\n");

    let script = "remove O\nmove O 1 1\nsnapshot never";
    let outcome = CommandInterpreter::run_str(&mut album, script);
    if let BatchOutcome::Halted {
        line_number,
        error,
        applied,
        ..
    } = &outcome
    {
        println!(
            "✗ Halted on line {} after {} commands: {}",
            line_number, applied, error
        );
    }

    println!("\nLive shapes: {}", album.shapes().len());
    println!("Snapshots: {}\n", album.get_snapshot_ids());
    println!("{}", album.print_snapshots());

    Ok(())
}
