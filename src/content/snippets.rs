//! Network constants and the code snippets shown in the documentation.
//!
//! Snippet text is opaque to the rest of the crate: it is never parsed or
//! validated, only handed to the highlighter for display.

pub const CHAIN_ID: u32 = 1043;
pub const CHAIN_ID_TESTNET: u32 = 10431;
pub const RPC_MAINNET: &str = "https://rpc.awakening.bdagscan.com";
pub const RPC_TESTNET: &str = "https://rpc.primordial.bdagscan.com";
pub const ENTRY_POINT: &str = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789";
pub const EXPLORER: &str = "https://bdagscan.com";
pub const EXPLORER_TESTNET: &str = "testnet.bdagscan.com";
pub const GITHUB: &str = "https://github.com/yourusername/blockdag-sdk";

pub const QUICK_START: &str = r#"import { createBlockDAGClient } from 'blockdag-sdk';
import { privateKeyToAccount } from 'viem/accounts';

// 1. Setup the owner (your EOA)
const owner = privateKeyToAccount('0xYOUR_PRIVATE_KEY');

// 2. Initialize the Smart Account Client
// This wraps the BlockDAGLightAccount contracts automatically
const bdagClient = await createBlockDAGClient({
  signer: owner,
  chain: 'mainnet', // or 'testnet'
  apiKey: 'YOUR_API_KEY' // Optional
});

console.log("My Smart Account:", bdagClient.account.address);"#;

pub const SOLIDITY_INTERFACE: &str = r#"// BlockDAGLightAccount.sol Interface
interface IBlockDAGLightAccount {
    // Execute a single call
    function execute(address dest, uint256 value, bytes calldata func) external;

    // Execute multiple calls (Atomic Batch)
    function executeBatch(address[] calldata dest, uint256[] calldata value, bytes[] calldata func) external;

    // Deposit rewards for gas or staking
    function depositMiningRewards() external payable;

    // Get nonce for parallel execution (2D Nonce)
    function getNonce(uint192 key) external view returns (uint256);
}"#;

pub const FACTORY_INTERFACE: &str = r#"// BlockDAGLightAccountFactory.sol
// Deploys accounts using CREATE2 for deterministic addresses
function createAccount(address owner, uint256 salt) external returns (BlockDAGLightAccount);

function getAddress(address owner, uint256 salt) public view returns (address);"#;

pub const INSTALL_NPM: &str = "npm install blockdag-sdk viem";

pub const INSTALL_YARN: &str = "yarn add blockdag-sdk viem";

pub const CREATE_ACCOUNT: &str = r#"import { createSmartAccount } from 'blockdag-sdk';
import { http } from 'viem';

// The SDK uses BlockDAGLightAccountFactory under the hood
const account = await createSmartAccount({
  signer: owner,
  transport: http('https://rpc.awakening.bdagscan.com'),
  entryPoint: '0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789',
  salt: 123n // Optional salt for address generation
});"#;

pub const SEND_TX: &str = r#"const hash = await bdagClient.sendUserOperation({
  target: '0xRecipientAddress',
  value: parseEther('10'), // Sending 10 BDAG
  data: '0x'
});

await bdagClient.waitForUserOperationTransaction(hash);"#;

pub const BATCH_TX: &str = r#"// This calls BlockDAGLightAccount.executeBatch()
const hash = await bdagClient.sendBatchUserOperation([
  {
    target: tokenAddress,
    data: encodeFunctionData({ ...approveAbi... })
  },
  {
    target: swapContract,
    data: encodeFunctionData({ ...swapAbi... })
  }
]);"#;

pub const MINING: &str = r#"// Interacts with miningRewardsBalance mapping
const balance = await bdagClient.mining.getRewardsBalance();

// Calls depositMiningRewards() on the smart account
const tx = await bdagClient.mining.depositRewards({
  value: parseEther('100')
});"#;
