//! Headless Scripted Session
//!
//! Drives one GameSession through an afternoon in the library and a trip
//! into the hive, printing events as they happen. Useful for eyeballing the
//! simulation without a render layer attached.

use cozy_library_engine::game::session::{GameSession, SessionEvent};
use cozy_library_engine::game::{activities, dialogue, save};
use cozy_library_engine::input::KeyCode;

const DT: f32 = 1.0 / 60.0;
const FRAME_CAP: u32 = 10_000;

fn main() {
    println!("[Library Sim] starting a new session");
    let mut session = GameSession::with_seed(7);

    // A short conversation with the companion
    let hub = dialogue::start(&mut session.progress);
    let choices = dialogue::available_choices(hub, session.progress.trust_level);
    if let Some(next) = dialogue::choose(&mut session.progress, choices[2]) {
        println!("[Library Sim] Puro: {}", next.text);
        let replies = dialogue::available_choices(next, session.progress.trust_level);
        dialogue::choose(&mut session.progress, replies[0]);
    }
    println!(
        "[Library Sim] after talking, trust = {}",
        session.progress.trust_level
    );

    // An activity together
    let read = activities::find("read").expect("activity table");
    let message = activities::complete(&mut session.progress, read);
    println!(
        "[Library Sim] {} (trust {})",
        message, session.progress.trust_level
    );

    // Walk to the companion until the teleport fires
    session.input.handle_key(KeyCode::D, true);
    session.input.handle_key(KeyCode::W, true);
    let mut teleported = false;
    for frame in 0..FRAME_CAP {
        if session
            .update(DT)
            .contains(&SessionEvent::TeleportedToHive)
        {
            println!(
                "[Library Sim] reached the companion after {:.1}s",
                frame as f32 * DT
            );
            teleported = true;
            break;
        }
    }
    session.input.handle_key(KeyCode::W, false);
    if !teleported {
        eprintln!("[Library Sim] never reached the companion, giving up");
        return;
    }

    // In the hive: walk toward the first beast and watch its phases
    session.input.handle_key(KeyCode::S, true);
    let mut last_phase = session.hive().beasts()[0].phase();
    let mut captured = false;
    for frame in 0..FRAME_CAP {
        let events = session.update(DT);

        let phase = session.hive().beasts()[0].phase();
        if phase != last_phase {
            println!("[Library Sim] beast 0: {:?} -> {:?}", last_phase, phase);
            last_phase = phase;
        }

        if let Some(SessionEvent::EncounterStarted { message }) = events.first() {
            println!(
                "[Library Sim] captured after {:.1}s: {}",
                frame as f32 * DT,
                message
            );
            captured = true;
            break;
        }
    }
    session.input.handle_key(KeyCode::D, false);
    session.input.handle_key(KeyCode::S, false);
    if !captured {
        eprintln!("[Library Sim] the beasts never caught us, giving up");
        return;
    }

    session.resolve_encounter();
    session.return_to_library();

    // Save, reload, and show the ending this trust level earns
    let save_path = std::env::temp_dir().join("cozy_library_demo.clsave");
    match session.save_to(&save_path) {
        Ok(()) => {
            let reloaded = save::load_game(&save_path).expect("reload own save");
            println!(
                "[Library Sim] save round-trip ok: trust {}, {} transfur(s)",
                reloaded.progress.trust_level, reloaded.progress.transfur_count
            );
            std::fs::remove_file(&save_path).ok();
        }
        Err(e) => eprintln!("[Library Sim] save failed: {e}"),
    }

    let ending = session.reach_ending();
    println!(
        "[Library Sim] trust {} earns \"{}\"",
        session.progress.trust_level, ending.name
    );
}
