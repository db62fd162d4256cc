#![no_main]

use libfuzzer_sys::fuzz_target;
use squat_model::{evaluate, validate_pose, validate_result, MassProfile, PoseInputs, Scene};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(inputs) = PoseInputs::from_json(text) else {
        return;
    };
    let _ = validate_pose(&inputs);
    for profile in MassProfile::ALL {
        let result = evaluate(&inputs, profile);
        let _ = validate_result(&result);
        let _ = Scene::from_result(&result);
    }
});
