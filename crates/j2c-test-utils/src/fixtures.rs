//! Sample inputs shaped like real openHAB exports.

/// A JSON database dump of persisted items.
pub const ITEMS_JSONDB: &str = r#"{
  "gLights": {
    "class": "org.eclipse.smarthome.core.items.ManagedItemProvider$PersistedItem",
    "value": {
      "groupNames": [],
      "itemType": "Group",
      "tags": [],
      "label": "All lights",
      "baseItemType": "Switch",
      "functionName": "OR",
      "functionParams": ["ON", "OFF"]
    }
  },
  "Kitchen_Light": {
    "class": "org.eclipse.smarthome.core.items.ManagedItemProvider$PersistedItem",
    "value": {
      "groupNames": ["gLights"],
      "itemType": "Switch",
      "tags": ["Lighting"],
      "label": "Kitchen Light",
      "category": "light"
    }
  },
  "Hall_Dimmer": {
    "class": "org.eclipse.smarthome.core.items.ManagedItemProvider$PersistedItem",
    "value": {
      "groupNames": ["gLights"],
      "itemType": "Dimmer",
      "tags": [],
      "label": "Hall"
    }
  }
}"#;

/// A channel-link export matching two of the items in [`ITEMS_JSONDB`] and
/// one item that is declared nowhere.
pub const CHANNEL_LINKS_JSONDB: &str = r#"{
  "Kitchen_Light -> zwave:device:1:node2:switch_binary": {
    "class": "org.eclipse.smarthome.core.thing.link.ItemChannelLink",
    "value": {
      "channelUID": {"segments": ["zwave:device:1:node2", "switch_binary"]},
      "configuration": {"properties": {"profile": "default"}},
      "itemName": "Kitchen_Light"
    }
  },
  "Hall_Dimmer -> zwave:device:1:node3:switch_dimmer": {
    "class": "org.eclipse.smarthome.core.thing.link.ItemChannelLink",
    "value": {
      "channelUID": {"segments": ["zwave:device:1:node3", "switch_dimmer"]},
      "configuration": {"properties": {}},
      "itemName": "Hall_Dimmer"
    }
  },
  "Garage_Door -> zwave:device:1:node9:sensor_door": {
    "class": "org.eclipse.smarthome.core.thing.link.ItemChannelLink",
    "value": {
      "channelUID": {"segments": ["zwave:device:1:node9", "sensor_door"]},
      "itemName": "Garage_Door"
    }
  }
}"#;

/// An `.items` file declaring the items of [`ITEMS_JSONDB`] by hand.
pub const LIGHTS_ITEMS: &str = "\
Group:Switch:OR(ON,OFF) gLights \"All lights\"

Switch Kitchen_Light \"Kitchen Light\" <light> (gLights) [\"Lighting\"]
Dimmer Hall_Dimmer \"Hall\" (gLights) {autoupdate=\"false\"}
";

/// An `.items` file none of the links in [`CHANNEL_LINKS_JSONDB`] target.
pub const UNRELATED_ITEMS: &str = "\
Contact Window_Sensor \"Window\"
Number Outdoor_Temp \"Outside [%.1f °C]\"
";
