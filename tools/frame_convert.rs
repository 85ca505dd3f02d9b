use clap::Parser;

use bevy_message_visualizations::utils::FrameConvertArgs;


fn main() {
    let args = FrameConvertArgs::parse();

    let Some(converted) = args.convert() else {
        eprintln!(
            "expected {} components, got {}",
            if args.quaternion { 4 } else { 3 },
            args.components.len(),
        );
        std::process::exit(2);
    };

    let formatted: Vec<String> = converted
        .iter()
        .map(|value| format!("{value:.6}"))
        .collect();

    println!("{} -> {}: {}", args.from, args.to, formatted.join(" "));
}
