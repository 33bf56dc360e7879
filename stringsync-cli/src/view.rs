use stringsync::StringTable;

/// Print every entry of the master table, ID-ascending.
pub fn print_table(table: &StringTable, full: bool) {
    println!("Entries: {}", table.len());

    for entry in table {
        println!("\n  {:>6}  {}", entry.id, entry.signature);
        if !entry.keywords.is_empty() {
            println!("          Keywords: {}", entry.keywords);
        }
        if !entry.description.is_empty() {
            if full || entry.description.len() <= 50 {
                println!("          Description: {}", entry.description);
            } else {
                let cut = entry
                    .description
                    .char_indices()
                    .take_while(|(i, _)| *i < 50)
                    .last()
                    .map(|(i, c)| i + c.len_utf8())
                    .unwrap_or(0);
                println!("          Description: {}...", &entry.description[..cut]);
            }
        }
    }
}
