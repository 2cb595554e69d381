// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

fn main() {
    // Lade .env file für den Helligkeits-Parameter
    // Fehler ignorieren wenn .env nicht existiert (dann gilt der Default 31)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  .env file nicht gefunden: {}", e);
        eprintln!("   LED_RGB1_MAXBRT nicht gesetzt, nutze Default (31)");
    }

    // Gebe den Parameter an Rust-Compiler weiter
    // Der Wert wird zur Compile-Zeit eingebacken und zur Laufzeit geparst
    if let Ok(maxbrt) = std::env::var("LED_RGB1_MAXBRT") {
        println!("cargo:rustc-env=LED_RGB1_MAXBRT={}", maxbrt);
    }
    println!("cargo:rerun-if-env-changed=LED_RGB1_MAXBRT");

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    //    Definiert Flash/RAM-Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Vom Linker aufgerufen: args[1] = Fehler-Typ, args[2] = Symbol-Name
    if args.len() > 2 {
        let hint = match (args[1].as_str(), args[2].as_str()) {
            ("undefined-symbol", what) if what.starts_with("_defmt_") => Some(
                "`defmt` not found - make sure `defmt.x` is added as a linker script and `esp-println` has the `defmt-espflash` feature",
            ),
            ("undefined-symbol", "_stack_start") => {
                Some("Is the linker script `linkall.x` missing?")
            }
            ("undefined-symbol", _) => None,
            // Für "missing-lib" gibt es keinen Tipp
            _ => std::process::exit(1),
        };

        if let Some(hint) = hint {
            eprintln!();
            eprintln!("💡 {}", hint);
            eprintln!();
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
