//! Builder functions for each documentation page.
//!
//! Prose is kept close to the published site copy; the layout blocks are
//! deliberately plain so the view layer decides all presentation.

use super::snippets;
use super::{Block, CodeWindow, Page};

fn page(blocks: Vec<Block>) -> Page {
    Page { blocks }
}

pub fn overview() -> Page {
    page(vec![
        Block::Heading("Build the future on BlockDAG Network".to_string()),
        Block::Paragraph(format!(
            "The professional TypeScript SDK for ERC-4337 Account Abstraction on \
             Chain ID {}. Powered by the BlockDAGLightAccount smart contracts.",
            snippets::CHAIN_ID
        )),
        Block::Bullets(vec![
            "High Throughput - optimized for BlockDAG's parallel execution capabilities."
                .to_string(),
            "ERC-4337 Native - built-in account abstraction support without trusted relays."
                .to_string(),
            "Mining Rewards - first-class support for participating in consensus.".to_string(),
        ]),
        Block::Note(
            "Press J to jump to the Quick Start, or open the sidebar with Tab to browse \
             all sections."
                .to_string(),
        ),
        Block::Paragraph(format!(
            "Explorer: {}  ·  Source: {}",
            snippets::EXPLORER,
            snippets::GITHUB
        )),
    ])
}

pub fn quick_start() -> Page {
    page(vec![
        Block::Heading("Quick Start".to_string()),
        Block::Paragraph(
            "Initialize a Smart Account in under 30 seconds. The SDK handles all the \
             complexity of the UserOperation loop and contract deployment."
                .to_string(),
        ),
        Block::Code(CodeWindow::new("typescript", snippets::QUICK_START).typing()),
        Block::Note(
            "Tip: You do not need to deploy the contract manually. The SDK uses a \
             \"Counterfactual Address\" which allows you to receive funds before the \
             account is deployed."
                .to_string(),
        ),
    ])
}

pub fn smart_contracts() -> Page {
    page(vec![
        Block::Heading("Smart Contracts".to_string()),
        Block::Paragraph(
            "The SDK interacts with two primary contracts deployed on the BlockDAG \
             network. These contracts are optimized for high-throughput and parallel \
             execution using a 2D nonce mechanism."
                .to_string(),
        ),
        Block::Bullets(vec![
            "Light Account (BlockDAGLightAccount.sol): BaseAccount implementation, \
             parallel execution via 2D Nonces, native mining rewards support, batch \
             execution enabled."
                .to_string(),
            "Factory (BlockDAGLightAccountFactory.sol): deterministic deployment \
             (CREATE2), ERC-1967 proxy pattern, gas-efficient instantiation, salt-based \
             address derivation."
                .to_string(),
        ]),
        Block::Paragraph("Light Account Interface:".to_string()),
        Block::Code(CodeWindow::new("solidity", snippets::SOLIDITY_INTERFACE)),
        Block::Paragraph("Factory Interface:".to_string()),
        Block::Code(CodeWindow::new("solidity", snippets::FACTORY_INTERFACE)),
    ])
}

pub fn installation() -> Page {
    page(vec![
        Block::Heading("Installation".to_string()),
        Block::Paragraph("Install the SDK and its peer dependency, viem.".to_string()),
        Block::Paragraph("NPM:".to_string()),
        Block::Code(CodeWindow::new("bash", snippets::INSTALL_NPM)),
        Block::Paragraph("Yarn:".to_string()),
        Block::Code(CodeWindow::new("bash", snippets::INSTALL_YARN)),
    ])
}

pub fn create_account() -> Page {
    page(vec![
        Block::Heading("Create Smart Account".to_string()),
        Block::Paragraph(
            "BlockDAG uses the BlockDAGLightAccountFactory to deploy accounts. This \
             ensures you can generate your address before you pay any gas \
             (Counterfactual deployment)."
                .to_string(),
        ),
        Block::Code(CodeWindow::new("typescript", snippets::CREATE_ACCOUNT)),
    ])
}

pub fn send_transactions() -> Page {
    page(vec![
        Block::Heading("Send Transactions".to_string()),
        Block::Paragraph(
            "Sending basic transactions is as simple as defining a target and value. \
             The SDK manages the UserOperation signing automatically."
                .to_string(),
        ),
        Block::Code(CodeWindow::new("typescript", snippets::SEND_TX)),
    ])
}

pub fn batch_transactions() -> Page {
    page(vec![
        Block::Heading("Batch Transactions".to_string()),
        Block::Paragraph(
            "The BlockDAGLightAccount supports atomic batch execution. This saves gas \
             and improves UX by bundling approve+swap or multiple transfers into a \
             single signature."
                .to_string(),
        ),
        Block::Code(CodeWindow::new("typescript", snippets::BATCH_TX).highlight(&[2])),
    ])
}

pub fn mining_rewards() -> Page {
    page(vec![
        Block::Heading("Mining Rewards".to_string()),
        Block::Note(
            "Native Mining Integration: unique to Chain ID 1043, Smart Accounts can \
             participate in the consensus mechanism directly via delegation. The \
             miningRewardsBalance state variable tracks your accrued rewards."
                .to_string(),
        ),
        Block::Code(CodeWindow::new("typescript", snippets::MINING)),
    ])
}

pub fn configuration() -> Page {
    page(vec![
        Block::Heading("Configuration".to_string()),
        Block::Table {
            headers: vec![
                "Parameter".to_string(),
                "Mainnet (Awakening)".to_string(),
                "Testnet (Primordial)".to_string(),
            ],
            rows: vec![
                vec![
                    "Chain ID".to_string(),
                    snippets::CHAIN_ID.to_string(),
                    snippets::CHAIN_ID_TESTNET.to_string(),
                ],
                vec![
                    "RPC URL".to_string(),
                    snippets::RPC_MAINNET.to_string(),
                    snippets::RPC_TESTNET.to_string(),
                ],
                vec![
                    "Explorer".to_string(),
                    "bdagscan.com".to_string(),
                    snippets::EXPLORER_TESTNET.to_string(),
                ],
                vec![
                    "EntryPoint".to_string(),
                    snippets::ENTRY_POINT.to_string(),
                    snippets::ENTRY_POINT.to_string(),
                ],
            ],
        },
    ])
}

/// Shared body for sections whose documentation is not finished yet.
pub fn coming_soon() -> Page {
    page(vec![
        Block::ComingSoon,
        Block::Paragraph(
            "We are currently finalizing the documentation for this section. Check \
             back in v1.1.0 for updates."
                .to_string(),
        ),
    ])
}
