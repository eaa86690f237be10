mod facade;
mod stage;

fn main() {
    pollster::block_on(
        facade::run()
    );
}
