// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Built-in use-case descriptions served when the text generator is
//! unavailable or fails

/// Fallback text for the classes the deployed detector is trained on.
fn builtin(class_label: &str) -> Option<&'static str> {
    let text = match class_label {
        // Gas cylinders and tanks
        "NitrogenTank" => "A pressurized container storing nitrogen gas. Used in various industries for inerting, purging, food packaging, and as a coolant in medical and scientific applications. Nitrogen is an inert gas that prevents oxidation.",
        "OxygenTank" => "A pressurized cylinder containing medical-grade oxygen. Essential for patients with respiratory conditions, in hospitals, ambulances, and home healthcare. Also used in aviation, diving, and industrial processes.",
        "GasCylinder" => "A pressurized container for storing gases. Used for various industrial, medical, and commercial applications including welding, cooking fuel, medical gases, and chemical processes.",
        "PropaneTank" => "A container for liquefied petroleum gas (LPG). Commonly used for heating, cooking, hot water systems, and as fuel for grills, forklifts, and generators.",
        // Fire safety equipment
        "FireExtinguisher" => "A fire safety device used to extinguish or control small fires. Contains extinguishing agents like dry chemical, CO2, or foam. Essential in buildings, vehicles, and industrial settings for emergency fire suppression.",
        "FireHydrant" => "A connection point for firefighters to access water supply. Located along streets and in buildings for emergency firefighting operations.",
        "FireAlarm" => "A safety device that detects smoke, heat, or fire and alerts occupants through audible and visual signals. Crucial for early fire detection and evacuation.",
        // Safety equipment
        "FirstAidBox" => "A container storing medical supplies and equipment for emergency first aid treatment. Contains bandages, antiseptics, gloves, and basic medical tools. Essential in workplaces, schools, and public areas for immediate medical response.",
        "FirstAidKit" => "A collection of medical supplies and equipment for providing initial medical treatment. Contains bandages, antiseptics, gloves, and basic medical tools for emergency situations.",
        "SafetyCone" => "A cone-shaped marker used for road safety, construction zones, and hazard areas. Provides visual warning to redirect traffic and mark dangerous areas.",
        "SafetyVest" => "A high-visibility garment worn to make the wearer more visible. Used by construction workers, emergency personnel, and in low-light conditions for safety.",
        "SafetySwitchPanel" => "An electrical control panel with emergency stop buttons and safety switches. Used in industrial settings to quickly shut down machinery during emergencies for operator safety.",
        "EmergencyPhone" => "An emergency communication device used for immediate contact with security, medical, or emergency services. Typically found in elevators, parking garages, campuses, and industrial facilities for emergency situations.",
        // General objects
        "Person" => "A human being engaged in various activities. Can be working, operating equipment, or performing tasks depending on the context.",
        "Vehicle" => "A machine used for transportation of people or goods. Includes cars, trucks, forklifts, and other mobile equipment.",
        "Computer" => "An electronic device for data processing and communication. Used for monitoring, control systems, data analysis, and operational management.",
        "CreditCard" => "A payment card issued by financial institutions. Standard size is 8.56 cm x 5.4 cm. Used for electronic payments and identification.",
        _ => return None,
    };
    Some(text)
}

/// Immediate description for a class: the built-in text when known, a
/// generic sentence otherwise.
pub fn fallback_description(class_label: &str) -> String {
    match builtin(class_label) {
        Some(text) => text.to_string(),
        None => format!(
            "A {} is used in various industrial, safety, or operational contexts depending on the specific application and environment.",
            class_label
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_class() {
        let text = fallback_description("FireExtinguisher");
        assert!(text.starts_with("A fire safety device"));
    }

    #[test]
    fn test_unknown_class_gets_generic_sentence() {
        let text = fallback_description("FluxCapacitor");
        assert!(text.starts_with("A FluxCapacitor is used in various industrial"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Class labels come from the detector verbatim
        assert!(fallback_description("fireextinguisher").starts_with("A fireextinguisher is used"));
    }
}
