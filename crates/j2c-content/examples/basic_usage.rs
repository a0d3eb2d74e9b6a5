//! Basic usage example for j2c-content

use j2c_content::{
    ChannelFormat, ChannelLink, ItemExtractor, append_channel, parse_document, render_tree,
    summary_line,
};

fn main() -> j2c_content::Result<()> {
    let source = r#"{
  "Kitchen_Light": {
    "class": "org.eclipse.smarthome.core.items.ManagedItemProvider$PersistedItem",
    "value": {
      "groupNames": ["gKitchen"],
      "itemType": "Switch",
      "tags": ["Lighting"],
      "label": "Kitchen Light",
      "category": "light"
    }
  }
}"#;

    let document = parse_document(source)?;

    println!("Tree:");
    print!("{}", render_tree(&document, "  "));

    let extraction = ItemExtractor::default().extract_all(&document);
    println!("\nItems:");
    for (name, record) in &extraction.items {
        println!("{}", summary_line(name, record));
    }

    println!("\nItems file:");
    let link = ChannelLink::new("Kitchen_Light", ["hue:0100:bridge", "1", "color"]);
    for (name, record) in &extraction.items {
        let line = record.to_config_line(name);
        println!("{}", append_channel(&line, &link, ChannelFormat::default()));
    }

    Ok(())
}
