#![cfg(feature = "test-sbf")]

use anchor_lang::{AnchorDeserialize, InstructionData, ToAccountMetas};
use credential_vault::state::{Asset, VaultConfig};
use light_program_test::{program_test::LightProgramTest, ProgramTestConfig, Rpc, RpcError};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_program,
    transaction::Transaction,
};

const VAULT_SEED: &[u8] = b"vault";
const ASSET_SEED: &[u8] = b"asset";
const OPERATOR_SEED: &[u8] = b"operator";

const PAYLOAD: &[u8] = br#"{"iv":"000102030405060708090a0b","encrypted":"c0ffee"}"#;

fn get_vault_pda(authority: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[VAULT_SEED, authority.as_ref()], &credential_vault::ID).0
}

fn get_asset_pda(vault: &Pubkey, asset_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[ASSET_SEED, vault.as_ref(), &asset_id.to_le_bytes()],
        &credential_vault::ID,
    )
    .0
}

fn get_operator_approval_pda(vault: &Pubkey, owner: &Pubkey, operator: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[OPERATOR_SEED, vault.as_ref(), owner.as_ref(), operator.as_ref()],
        &credential_vault::ID,
    )
    .0
}

async fn setup() -> (LightProgramTest, Keypair, Pubkey) {
    let config = ProgramTestConfig::new(
        true,
        Some(vec![("credential_vault", credential_vault::ID)]),
    );
    let mut rpc = LightProgramTest::new(config).await.unwrap();
    let payer = rpc.get_payer().insecure_clone();
    let vault = get_vault_pda(&payer.pubkey());

    let instruction = Instruction {
        program_id: credential_vault::ID,
        accounts: credential_vault::accounts::InitializeVault {
            authority: payer.pubkey(),
            vault,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: credential_vault::instruction::InitializeVault {}.data(),
    };
    rpc.create_and_send_transaction(&[instruction], &payer.pubkey(), &[&payer])
        .await
        .unwrap();

    (rpc, payer, vault)
}

async fn funded_keypair(rpc: &mut LightProgramTest) -> Keypair {
    let keypair = Keypair::new();
    rpc.airdrop_lamports(&keypair.pubkey(), 1_000_000_000)
        .await
        .unwrap();
    keypair
}

async fn mint_asset(
    rpc: &mut LightProgramTest,
    owner: &Keypair,
    vault: &Pubkey,
    payload: &[u8],
) -> Result<Pubkey, RpcError> {
    let next_asset_id = rpc
        .get_anchor_account::<VaultConfig>(vault)
        .await?
        .unwrap()
        .next_asset_id;
    let asset = get_asset_pda(vault, next_asset_id);

    let instruction = Instruction {
        program_id: credential_vault::ID,
        accounts: credential_vault::accounts::MintAsset {
            owner: owner.pubkey(),
            vault: *vault,
            asset,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: credential_vault::instruction::MintAsset {
            encrypted_payload: payload.to_vec(),
            game_id: "genshin-impact".to_string(),
            listing_price: 1_000_000_000,
            metadata_ref: "ipfs://account-metadata".to_string(),
        }
        .data(),
    };
    rpc.create_and_send_transaction(&[instruction], &owner.pubkey(), &[owner])
        .await?;
    Ok(asset)
}

async fn read_payload(
    rpc: &mut LightProgramTest,
    caller: &Keypair,
    asset: &Pubkey,
) -> Result<Signature, RpcError> {
    let instruction = Instruction {
        program_id: credential_vault::ID,
        accounts: credential_vault::accounts::GetEncryptedPayload {
            caller: caller.pubkey(),
            asset: *asset,
        }
        .to_account_metas(None),
        data: credential_vault::instruction::GetEncryptedPayload {}.data(),
    };
    rpc.create_and_send_transaction(&[instruction], &caller.pubkey(), &[caller])
        .await
}

/// Payload bytes as returned to `caller`, or `None` when the read is refused.
fn fetch_payload(
    rpc: &mut LightProgramTest,
    caller: &Keypair,
    asset: &Pubkey,
) -> Option<Vec<u8>> {
    let instruction = Instruction {
        program_id: credential_vault::ID,
        accounts: credential_vault::accounts::GetEncryptedPayload {
            caller: caller.pubkey(),
            asset: *asset,
        }
        .to_account_metas(None),
        data: credential_vault::instruction::GetEncryptedPayload {}.data(),
    };
    let tx = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&caller.pubkey()),
        &[caller],
        rpc.context.latest_blockhash(),
    );
    let simulated = rpc.context.simulate_transaction(tx).ok()?;
    Vec::<u8>::try_from_slice(&simulated.meta.return_data.data).ok()
}

async fn transfer(
    rpc: &mut LightProgramTest,
    caller: &Keypair,
    asset: &Pubkey,
    operator_approval: Option<Pubkey>,
    new_owner: Pubkey,
) -> Result<Signature, RpcError> {
    let instruction = Instruction {
        program_id: credential_vault::ID,
        accounts: credential_vault::accounts::TransferAsset {
            caller: caller.pubkey(),
            asset: *asset,
            operator_approval,
        }
        .to_account_metas(None),
        data: credential_vault::instruction::TransferAsset { new_owner }.data(),
    };
    rpc.create_and_send_transaction(&[instruction], &caller.pubkey(), &[caller])
        .await
}

async fn claim(
    rpc: &mut LightProgramTest,
    fee_payer: &Keypair,
    claimer: &Keypair,
    asset: &Pubkey,
) -> Result<Signature, RpcError> {
    let instruction = Instruction {
        program_id: credential_vault::ID,
        accounts: credential_vault::accounts::ClaimCredentials {
            claimer: claimer.pubkey(),
            asset: *asset,
        }
        .to_account_metas(None),
        data: credential_vault::instruction::ClaimCredentials {}.data(),
    };
    let signers: Vec<&Keypair> = if fee_payer.pubkey() == claimer.pubkey() {
        vec![claimer]
    } else {
        vec![fee_payer, claimer]
    };
    rpc.create_and_send_transaction(&[instruction], &fee_payer.pubkey(), &signers)
        .await
}

#[tokio::test]
async fn test_mint_assigns_sequential_ids() {
    let (mut rpc, _payer, vault) = setup().await;
    let seller = funded_keypair(&mut rpc).await;

    let first = mint_asset(&mut rpc, &seller, &vault, PAYLOAD).await.unwrap();
    let second = mint_asset(&mut rpc, &seller, &vault, PAYLOAD).await.unwrap();

    let first = rpc.get_anchor_account::<Asset>(&first).await.unwrap().unwrap();
    let second = rpc.get_anchor_account::<Asset>(&second).await.unwrap().unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.owner, seller.pubkey());
    assert_eq!(first.encrypted_payload, PAYLOAD);
    assert!(!first.is_claimed);
    assert!(first.claimer.is_none());
    assert!(!first.sale_locked);
}

#[tokio::test]
async fn test_mint_rejects_empty_payload() {
    let (mut rpc, _payer, vault) = setup().await;
    let seller = funded_keypair(&mut rpc).await;

    assert!(mint_asset(&mut rpc, &seller, &vault, &[]).await.is_err());

    let config = rpc.get_anchor_account::<VaultConfig>(&vault).await.unwrap().unwrap();
    assert_eq!(config.next_asset_id, 1);
}

#[tokio::test]
async fn test_payload_read_is_gated_to_owner() {
    let (mut rpc, _payer, vault) = setup().await;
    let seller = funded_keypair(&mut rpc).await;
    let stranger = funded_keypair(&mut rpc).await;
    let asset = mint_asset(&mut rpc, &seller, &vault, PAYLOAD).await.unwrap();

    assert!(read_payload(&mut rpc, &seller, &asset).await.is_ok());
    assert!(read_payload(&mut rpc, &stranger, &asset).await.is_err());

    assert_eq!(
        fetch_payload(&mut rpc, &seller, &asset).as_deref(),
        Some(PAYLOAD)
    );
    assert_eq!(fetch_payload(&mut rpc, &stranger, &asset), None);
}

#[tokio::test]
async fn test_claimer_keeps_read_access_after_transfer() {
    let (mut rpc, _payer, vault) = setup().await;
    let seller = funded_keypair(&mut rpc).await;
    let next_owner = funded_keypair(&mut rpc).await;
    let stranger = funded_keypair(&mut rpc).await;
    let asset = mint_asset(&mut rpc, &seller, &vault, PAYLOAD).await.unwrap();

    claim(&mut rpc, &seller, &seller, &asset).await.unwrap();
    transfer(&mut rpc, &seller, &asset, None, next_owner.pubkey())
        .await
        .unwrap();

    let moved = rpc.get_anchor_account::<Asset>(&asset).await.unwrap().unwrap();
    assert_eq!(moved.owner, next_owner.pubkey());
    assert_eq!(moved.claimer, Some(seller.pubkey()));

    assert_eq!(
        fetch_payload(&mut rpc, &seller, &asset).as_deref(),
        Some(PAYLOAD)
    );
    assert_eq!(
        fetch_payload(&mut rpc, &next_owner, &asset).as_deref(),
        Some(PAYLOAD)
    );
    assert_eq!(fetch_payload(&mut rpc, &stranger, &asset), None);
}

#[tokio::test]
async fn test_blanket_operator_transfers_until_revoked() {
    let (mut rpc, _payer, vault) = setup().await;
    let seller = funded_keypair(&mut rpc).await;
    let operator = funded_keypair(&mut rpc).await;
    let recipient = Pubkey::new_unique();
    let first = mint_asset(&mut rpc, &seller, &vault, PAYLOAD).await.unwrap();
    let second = mint_asset(&mut rpc, &seller, &vault, PAYLOAD).await.unwrap();
    let approval = get_operator_approval_pda(&vault, &seller.pubkey(), &operator.pubkey());

    let set_approval = |approved: bool| Instruction {
        program_id: credential_vault::ID,
        accounts: credential_vault::accounts::SetApprovalForAll {
            owner: seller.pubkey(),
            vault,
            operator_approval: approval,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: credential_vault::instruction::SetApprovalForAll {
            operator: operator.pubkey(),
            approved,
        }
        .data(),
    };

    // without a grant the operator is refused
    assert!(transfer(&mut rpc, &operator, &first, Some(approval), recipient)
        .await
        .is_err());

    rpc.create_and_send_transaction(&[set_approval(true)], &seller.pubkey(), &[&seller])
        .await
        .unwrap();
    transfer(&mut rpc, &operator, &first, Some(approval), recipient)
        .await
        .unwrap();

    let moved = rpc.get_anchor_account::<Asset>(&first).await.unwrap().unwrap();
    assert_eq!(moved.owner, recipient);
    assert!(!moved.is_claimed);

    rpc.create_and_send_transaction(&[set_approval(false)], &seller.pubkey(), &[&seller])
        .await
        .unwrap();
    assert!(transfer(&mut rpc, &operator, &second, Some(approval), recipient)
        .await
        .is_err());

    let kept = rpc.get_anchor_account::<Asset>(&second).await.unwrap().unwrap();
    assert_eq!(kept.owner, seller.pubkey());
}

#[tokio::test]
async fn test_claim_happens_exactly_once() {
    let (mut rpc, payer, vault) = setup().await;
    let seller = funded_keypair(&mut rpc).await;
    let stranger = funded_keypair(&mut rpc).await;
    let asset = mint_asset(&mut rpc, &seller, &vault, PAYLOAD).await.unwrap();

    assert!(claim(&mut rpc, &stranger, &stranger, &asset).await.is_err());
    claim(&mut rpc, &seller, &seller, &asset).await.unwrap();

    let claimed = rpc.get_anchor_account::<Asset>(&asset).await.unwrap().unwrap();
    assert!(claimed.is_claimed);
    assert_eq!(claimed.claimer, Some(seller.pubkey()));

    // distinct fee payer so the retry is a new transaction, not a duplicate
    assert!(claim(&mut rpc, &payer, &seller, &asset).await.is_err());
}

#[tokio::test]
async fn test_update_listing_price_owner_only() {
    let (mut rpc, _payer, vault) = setup().await;
    let seller = funded_keypair(&mut rpc).await;
    let stranger = funded_keypair(&mut rpc).await;
    let asset = mint_asset(&mut rpc, &seller, &vault, PAYLOAD).await.unwrap();

    let update = |signer: &Keypair, new_price: u64| Instruction {
        program_id: credential_vault::ID,
        accounts: credential_vault::accounts::UpdateListingPrice {
            owner: signer.pubkey(),
            asset,
        }
        .to_account_metas(None),
        data: credential_vault::instruction::UpdateListingPrice { new_price }.data(),
    };

    let ix = update(&stranger, 5);
    assert!(rpc
        .create_and_send_transaction(&[ix], &stranger.pubkey(), &[&stranger])
        .await
        .is_err());

    let ix = update(&seller, 2_000_000_000);
    rpc.create_and_send_transaction(&[ix], &seller.pubkey(), &[&seller])
        .await
        .unwrap();

    let updated = rpc.get_anchor_account::<Asset>(&asset).await.unwrap().unwrap();
    assert_eq!(updated.listing_price, 2_000_000_000);
}

#[tokio::test]
async fn test_marketplace_binding_is_one_time() {
    let (mut rpc, payer, vault) = setup().await;

    let bind = |marketplace_authority: Pubkey| Instruction {
        program_id: credential_vault::ID,
        accounts: credential_vault::accounts::ConfigureMarketplace {
            authority: payer.pubkey(),
            vault,
        }
        .to_account_metas(None),
        data: credential_vault::instruction::SetMarketplaceAuthority {
            marketplace_authority,
        }
        .data(),
    };

    let first = Pubkey::new_unique();
    rpc.create_and_send_transaction(&[bind(first)], &payer.pubkey(), &[&payer])
        .await
        .unwrap();
    assert!(rpc
        .create_and_send_transaction(&[bind(Pubkey::new_unique())], &payer.pubkey(), &[&payer])
        .await
        .is_err());

    let config = rpc.get_anchor_account::<VaultConfig>(&vault).await.unwrap().unwrap();
    assert_eq!(config.marketplace_authority, Some(first));
}
