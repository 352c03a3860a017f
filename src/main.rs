#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    age_lense_lib::run()
}
