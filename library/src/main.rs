use std::env;
use std::error::Error;
use std::fs;

use telestudio::editor::timecode::format_timecode;
use telestudio::plan_session_from_json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err("Please provide the path to an edit-session JSON file.".into());
    }

    let file_path = &args[1];
    let json_str = fs::read_to_string(file_path)?;
    let request = plan_session_from_json(&json_str, "EditedVideos").await?;

    println!("Render request: {} clip(s)", request.len());
    for (i, clip) in request.clips.iter().enumerate() {
        println!(
            "  {}: {} [{} - {}] effects={:?} transition_in={:?}",
            i,
            clip.source,
            format_timecode(clip.start_ms),
            format_timecode(clip.end_ms),
            clip.effects,
            clip.transition_in,
        );
    }
    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}
