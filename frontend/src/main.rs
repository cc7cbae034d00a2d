fn main() {
    ems_frontend::start();
}
