// Console progress lines for a mirror run

use crate::core::mirror::MirrorSummary;
use crate::ui::format_size;
use colored::Colorize;
use std::fmt::Display;
use std::path::Path;

pub fn banner(start_url: &str, output_dir: &Path) {
    println!();
    println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".cyan());
    println!("{}", "  Recursive Mirror".cyan().bold());
    println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".cyan());
    println!("{} {}", "🌐 Start URL:".cyan(), start_url);
    println!("{} ./{}/", "📁 Saving to:".cyan(), output_dir.display());
    println!();
}

pub fn visiting(url: &str) {
    println!("{} {}", "-> Processing:".green(), url);
}

pub fn folder_created(path: &Path) {
    println!("   {}", format!("[*] Creating folder: {}", path.display()).dimmed());
}

pub fn parent_created(path: &Path) {
    println!(
        "   {}",
        format!("[*] Creating parent folder: {}", path.display()).dimmed()
    );
}

pub fn file_downloaded(path: &Path, bytes: usize) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!(
        "   {} {} {}",
        "[*] Downloading file:".green(),
        name,
        format!("({})", format_size(bytes as u64)).dimmed()
    );
}

pub fn network_error(url: &str, err: &dyn Display) {
    log::debug!("Failed to fetch {}: {}", url, err);
    println!(
        "   {}",
        format!("[ERROR] Could not access URL {}: {}", url, err).yellow()
    );
}

pub fn write_error(path: &Path, err: &dyn Display) {
    log::debug!("Failed to write {}: {}", path.display(), err);
    println!(
        "   {}",
        format!("[ERROR] Could not save {}: {}", path.display(), err).yellow()
    );
}

pub fn summary(summary: &MirrorSummary) {
    println!();
    println!("{}", "Summary:".white().bold());
    println!("   {} {}", "Folders:".cyan(), summary.folders);
    println!(
        "   {} {} ({})",
        "Files:".cyan(),
        summary.files,
        format_size(summary.bytes)
    );
    if summary.has_errors() {
        println!(
            "   {} {} network, {} write",
            "Errors:".yellow(),
            summary.network_errors,
            summary.write_errors
        );
    }
}

pub fn done() {
    println!();
    println!("{}", "✓ Download complete!".green().bold());
}
