pub const DEFEAT: &str = "Boooooom!!! You stepped on a bomb and you died.";

/// Victory line, teasing or praising depending on how dense the field was.
pub fn victory(percent: u8, mines: usize, cells: usize) -> String {
    let verdict = match percent {
        0..10 => format!(
            "But that was super easy, you only had to flag {mines} bombs out of {cells} cells. Come on! you can do better."
        ),
        10..20 => format!(
            "Most people do ok at {percent}%, try increasing your percentage. You had to flag just {mines} bombs out of {cells} cells."
        ),
        20..30 => format!(
            "This is getting serious... at {percent}% you are above average. You flagged {mines} bombs out of {cells} cells."
        ),
        30..40 => format!(
            "Are you for real? at {percent}% you are way above average. You flagged {mines} bombs out of {cells} cells."
        ),
        40..50 => format!(
            "Seriously, are you human? at {percent}% you are at elite status! You flagged {mines} bombs out of {cells} cells."
        ),
        50.. => format!(
            "You must be an AI, right? at {percent}% you are at god level! You flagged {mines} bombs out of {cells} cells."
        ),
    };
    format!("OMG! You did it!! You won the game!!!!!\n{verdict}")
}
