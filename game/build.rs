const BAKED_KEYS: [&str; 2] = ["JOYSTICK_SIZE", "JOYSTICK_TURN_RATE"];

fn main() {
    if let Ok(it) = dotenvy::dotenv_iter() {
        for item in it {
            if let Ok((key, value)) = item {
                if BAKED_KEYS.contains(&key.as_str()) {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=.env");
}
