fn main() {
    robert_tattoo_site::start();
}
