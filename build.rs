fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    // Add crash log helper for better panic diagnostics
    println!("cargo:rustc-link-arg=-Wl,--undefined=esp_backtrace_print_app_description");

    // Optional override for the fallback access point name
    println!("cargo:rerun-if-env-changed=PROVISIONER_AP_SSID");
    match std::env::var("PROVISIONER_AP_SSID") {
        Ok(ssid) if !ssid.trim().is_empty() && ssid.trim().len() <= 32 => {
            println!("cargo:rustc-env=PROVISIONER_AP_SSID={}", ssid.trim());
        }
        Ok(ssid) if !ssid.trim().is_empty() => {
            println!("cargo:warning=PROVISIONER_AP_SSID '{}' is longer than 32 bytes, ignoring", ssid);
        }
        _ => {}
    }

    Ok(())
}
