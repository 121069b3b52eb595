//! The `memories` subcommands.

use tripledger_core::{MemoryStore, TravelMemory};

use crate::cli::MemoryAddArgs;

pub fn add(args: MemoryAddArgs) -> anyhow::Result<()> {
    let store = MemoryStore::open_default()?;
    let memory = TravelMemory::new([args.lng, args.lat], args.title, args.description, args.date);
    store.save(&memory)?;
    println!("Pinned memory {}", memory.id);
    Ok(())
}

pub fn list() -> anyhow::Result<()> {
    let store = MemoryStore::open_default()?;
    let memories = store.list()?;
    if memories.is_empty() {
        println!("No pinned memories yet.");
        return Ok(());
    }
    for memory in memories {
        println!(
            "{}  [{:.4}, {:.4}]  {}  {}",
            memory.id, memory.coordinates[0], memory.coordinates[1], memory.title, memory.date,
        );
        if !memory.description.is_empty() {
            println!("    {}", memory.description);
        }
    }
    Ok(())
}

pub fn remove(id: &str) -> anyhow::Result<()> {
    let store = MemoryStore::open_default()?;
    store.delete(id)?;
    println!("Removed memory {id}");
    Ok(())
}
