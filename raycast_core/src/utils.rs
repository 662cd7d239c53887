use colour::e_red;

pub fn print_intro() {
    eprintln!(
        r#"
                                       __
     _________ ___  ___________ ______/ /_
    / ___/ __ `/ / / / ___/ __ `/ ___/ __/
   / /  / /_/ / /_/ / /__/ /_/ (__  ) /_
  /_/   \__,_/\__, /\___/\__,_/____/\__/
             /____/                        "#
    );

    if cfg!(debug_assertions) {
        e_red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Keep in mind that everything is way slower than it should be.\n\n");
    }
}
