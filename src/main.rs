fn main() {
    twin_stick::game::run();
}
