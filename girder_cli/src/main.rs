//! # Girder CLI Application
//!
//! Terminal interface for the steel design library. Runs an interactive
//! width-to-thickness check against the built-in AISC shapes database and
//! prints both a formatted report and the JSON result.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use girder_core::materials::presets;
use girder_core::seismic::{check_wtr_wide_flange, DuctilityLevel, MemberType};
use girder_core::shapes::default_db;

fn prompt(text: &str, default: &str) -> String {
    print!("{}", text);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_f64(text: &str, default: f64) -> f64 {
    prompt(text, "").parse().unwrap_or(default)
}

fn main() -> ExitCode {
    println!("Girder CLI - Seismic Width-to-Thickness Check");
    println!("=============================================");
    println!();
    println!("Checks a wide-flange member against AISC 341-16 Table D1.1.");
    println!();

    let label = prompt("Enter shape label [W14X82]: ", "W14X82");
    let member = prompt("Member type (brace/beam/column) [column]: ", "column");
    let level = prompt("Ductility (moderate/high) [high]: ", "high");
    let ca = prompt_f64("Axial load ratio Ca [0.1]: ", 0.1);

    let member_type = match member.to_lowercase().as_str() {
        "brace" => MemberType::Brace,
        "beam" => MemberType::Beam,
        _ => MemberType::Column,
    };
    let ductility = match level.to_lowercase().as_str() {
        "moderate" => DuctilityLevel::Moderate,
        _ => DuctilityLevel::High,
    };
    let material = presets::a992();

    let shape = match default_db().lookup(&label) {
        Ok(shape) => shape,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!();
    match check_wtr_wide_flange(shape, member_type, ductility, ca, &material) {
        Ok(check) => {
            println!("═══════════════════════════════════════");
            println!("  WIDTH-TO-THICKNESS CHECK");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Shape:     {}", check.shape);
            println!("  Member:    {} ({})", member_type, ductility);
            println!("  Material:  {} (eFy = {:.1} ksi)", material.display_name(), material.expected_fy());
            println!("  Ca:        {:.3}", ca);
            println!();
            println!("Checks:");
            println!(
                "  Web h/tw:      {:.2} ({:.1}/{:.1}) {}",
                check.web_unity(),
                check.h_tw,
                check.h_tw_max,
                status_icon(check.h_tw <= check.h_tw_max)
            );
            println!(
                "  Flange bf/2tf: {:.2} ({:.2}/{:.2}) {}",
                check.flange_unity(),
                check.bf_2tf,
                check.bf_2tf_max,
                status_icon(check.bf_2tf <= check.bf_2tf_max)
            );
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  RESULT: {}",
                if check.passes() { "PASS" } else { "FAIL" }
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&check) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
