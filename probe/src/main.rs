fn main() {
    env_logger::init();
    print!("{}", teams_probe::run(teams_probe::TARGET_URL));
}
