
use {
    std::{env, fs::File, path::Path},
    gl_generator::{Registry, Api, Profile, Fallbacks, GlobalGenerator}
};

fn main() {
    let dest = env::var("OUT_DIR").unwrap();
    let mut file = File::create(&Path::new(&dest).join("bindings.rs")).unwrap();

    // lines only; no extensions needed
    let extensions: [&str; 0] = [];

    Registry::new(Api::Gl, (4, 5), Profile::Core, Fallbacks::All, extensions)
        .write_bindings(GlobalGenerator, &mut file)
        .unwrap();
}
