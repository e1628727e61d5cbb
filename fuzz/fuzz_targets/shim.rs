use std::{env, error::Error, ffi::c_int, fs, ptr};

extern "C" {
    // Sets up the panic hook libfuzzer-sys expects.
    fn LLVMFuzzerInitialize(
        argc: *const isize,
        argv: *const *const *const u8,
    ) -> c_int;

    // Runs a single input through the fuzz target. Used to replay crashes
    // without a fuzzing build.
    #[allow(improper_ctypes)]
    fn rust_fuzzer_test_input(input: &[u8]) -> i32;
}

/// Replays each file given on the command line through the fuzz target.
#[allow(unused)]
pub fn main() -> Result<(), Box<dyn Error>> {
    unsafe {
        let _ = LLVMFuzzerInitialize(ptr::null(), ptr::null());
    }
    let paths: Vec<_> = env::args_os().skip(1).collect();
    if paths.is_empty() {
        println!("usage: pass one or more test case files to replay");
        return Ok(());
    }
    for path in paths.iter() {
        let input = fs::read(path)?;
        unsafe {
            let _ = rust_fuzzer_test_input(&input);
        }
    }
    println!("replayed {} test cases", paths.len());
    Ok(())
}

#[macro_export]
macro_rules! maybe_define_main {
    () => {
        #[cfg(not(fuzzing))]
        fn main() {
            let _ = $crate::shim::main();
        }
    };
}
